use chrono::{DateTime, NaiveDate, Utc};
use creatorfit_core::{Account, Post};

pub(crate) fn date(y: i32, m: u32, d: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(12, 0, 0))
        .map(|naive| naive.and_utc())
}

pub(crate) fn make_post(id: &str, likes: u64, comments: u64, views: Option<u64>) -> Post {
    Post {
        id: id.to_owned(),
        date: None,
        date_text: String::new(),
        post_type: "post".to_owned(),
        caption: String::new(),
        likes,
        comments,
        views,
        hashtags: vec![],
    }
}

pub(crate) fn with_hashtags(mut post: Post, tags: &[&str]) -> Post {
    post.hashtags = tags.iter().map(|t| (*t).to_owned()).collect();
    post
}

pub(crate) fn make_account(posts: Vec<Post>) -> Account {
    Account {
        posts,
        ..Account::default()
    }
}
