//! End-to-end checks over the public engine API, starting from loose records
//! the way the match-finding service delivers them.

use creatorfit_analytics::{
    account_stats, derive_metrics, engagement_series, match_campaign, match_outcome,
    rank_hashtags, view_posts, views_by_type, RecommendationTier, SortDirection, SortField,
    HASHTAG_PIE_LIMIT, HASHTAG_TABLE_LIMIT,
};
use creatorfit_core::{normalize_account, parse_roster, Account, CampaignBrief, RawAccount, RosterFormat};
use serde_json::json;

fn account_from(value: serde_json::Value) -> Account {
    let raw: RawAccount = serde_json::from_value(value).expect("fixture should deserialize");
    normalize_account(raw)
}

fn food_account() -> Account {
    account_from(json!({
        "overview": { "fullName": "Maya Chen", "username": "mayaeats", "followers": 84000 },
        "niche": "Food",
        "targetLocation": "USA",
        "product": "Cookware",
        "posts": [
            {
                "id": "p1", "date": "2024-02-10", "type": "reel",
                "caption": "Five-minute FOOD hacks", "likes": 900, "comments": 40,
                "views": 12000, "hashtags": ["#foodhacks", "#kitchen"]
            },
            {
                "id": "p2", "date": "2024-01-03", "type": "post",
                "caption": "New pan day", "likes": 300, "comments": 25,
                "views": null, "hashtags": ["kitchen", "#cookware"]
            },
            {
                "id": "p3", "date": "2024-03-15", "type": "story",
                "caption": "Market haul", "likes": 300, "comments": 5,
                "hashtags": ["#market", "#food"]
            },
            {
                "id": "p4", "date": "2023-12-28", "type": "reel",
                "caption": "Holiday baking", "likes": 1500, "comments": 90,
                "views": 30000, "hashtags": ["#kitchen", "#baking"]
            }
        ]
    }))
}

#[test]
fn metrics_from_posts() {
    let metrics = derive_metrics(&food_account());
    // (900 + 300 + 300 + 1500) / 4
    assert_eq!(metrics.avg_likes, 750);
    // (40 + 25 + 5 + 90) / 4
    assert_eq!(metrics.avg_comments, 40);
    // (12000 + 30000) / 2, posts without views excluded
    assert_eq!(metrics.avg_video_views, 21000);
    // 790 / max(15000, 1000) * 100 = 5.2666.. -> 5.27
    assert!((metrics.engagement_rate - 5.27).abs() < 1e-9);
    assert_eq!(metrics.recommendation, "Strong Fit");
    assert_eq!(metrics.recommendation_tier(), RecommendationTier::Strong);
}

#[test]
fn empty_account_is_safe() {
    let account = account_from(json!({ "posts": [] }));
    let metrics = derive_metrics(&account);
    assert_eq!(metrics.avg_likes, 0);
    assert_eq!(metrics.avg_comments, 0);
    assert_eq!(metrics.avg_video_views, 0);
    assert!(metrics.engagement_rate.abs() < f64::EPSILON);
    assert_eq!(metrics.recommendation, "Strong Fit");
    assert!(engagement_series(&account.posts).is_empty());
    assert!(views_by_type(&account.posts).is_empty());
    assert!(rank_hashtags(&account.posts, HASHTAG_TABLE_LIMIT).is_empty());
    assert!(view_posts(&account.posts, "", SortField::Date, SortDirection::Desc).is_empty());
}

#[test]
fn every_operation_is_idempotent() {
    let account = food_account();
    let posts = &account.posts;

    assert_eq!(derive_metrics(&account), derive_metrics(&account));
    assert_eq!(engagement_series(posts), engagement_series(posts));
    assert_eq!(views_by_type(posts), views_by_type(posts));
    assert_eq!(
        rank_hashtags(posts, HASHTAG_TABLE_LIMIT),
        rank_hashtags(posts, HASHTAG_TABLE_LIMIT)
    );
    assert_eq!(
        view_posts(posts, "kitchen", SortField::Views, SortDirection::Asc),
        view_posts(posts, "kitchen", SortField::Views, SortDirection::Asc)
    );

    let roster = vec![account.clone()];
    let brief = CampaignBrief::new("food", "usa", "cook");
    assert_eq!(match_campaign(&roster, &brief), match_campaign(&roster, &brief));
}

#[test]
fn aggregating_does_not_disturb_later_derivations() {
    let account = food_account();
    let before = serde_json::to_string(&derive_metrics(&account)).unwrap();
    let _ = engagement_series(&account.posts);
    let _ = views_by_type(&account.posts);
    let _ = rank_hashtags(&account.posts, HASHTAG_PIE_LIMIT);
    let _ = view_posts(&account.posts, "food", SortField::Likes, SortDirection::Asc);
    let after = serde_json::to_string(&derive_metrics(&account)).unwrap();
    assert_eq!(before, after);
    assert_eq!(account, food_account());
}

#[test]
fn engagement_series_is_chronological() {
    let account = food_account();
    let ids: Vec<String> = engagement_series(&account.posts)
        .into_iter()
        .map(|p| p.post_id)
        .collect();
    assert_eq!(ids, vec!["p4", "p2", "p1", "p3"]);
}

#[test]
fn views_by_type_groups_in_first_seen_order() {
    let account = food_account();
    let summary: Vec<(String, u64, u64, u64)> = views_by_type(&account.posts)
        .into_iter()
        .map(|t| (t.post_type, t.views, t.count, t.avg_views))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("reel".to_string(), 42000, 2, 21000),
            ("post".to_string(), 0, 1, 0),
            ("story".to_string(), 0, 1, 0),
        ]
    );
}

#[test]
fn hashtag_ranking_merges_markers() {
    let account = food_account();
    let ranked = rank_hashtags(&account.posts, HASHTAG_TABLE_LIMIT);
    assert_eq!(ranked[0].hashtag, "kitchen");
    assert_eq!(ranked[0].count, 3);
    let rest: Vec<&str> = ranked[1..].iter().map(|h| h.hashtag.as_str()).collect();
    assert_eq!(rest, vec!["foodhacks", "cookware", "market", "food", "baking"]);
}

#[test]
fn filter_and_sort_compose() {
    let account = food_account();
    let rows = view_posts(&account.posts, "food", SortField::Likes, SortDirection::Asc);
    let ids: Vec<&str> = rows.iter().map(|p| p.id.as_str()).collect();
    // p3 via #food, p1 via caption and #foodhacks
    assert_eq!(ids, vec!["p3", "p1"]);
}

#[test]
fn matcher_over_loaded_roster() {
    let roster = parse_roster(
        r#"[{ "dashboardData": [
            { "overview": { "username": "trailhead" }, "niche": "Outdoors", "targetLocation": "Canada", "product": "Tents" },
            { "overview": { "username": "mayaeats" }, "niche": "Food", "targetLocation": "USA", "product": "Cookware" },
            { "overview": { "username": "nofields" } }
        ] }]"#,
        RosterFormat::Json,
    )
    .unwrap();

    let hit = match_outcome(&roster, &CampaignBrief::new("FOOD", "us", "cook"));
    assert!(!hit.fell_back);
    assert_eq!(hit.featured().unwrap().overview.handle(), "mayaeats");

    // niche and location fit, product does not
    let miss = match_campaign(&roster, &CampaignBrief::new("food", "usa", "tents"));
    assert_eq!(miss.len(), roster.len());
    let handles: Vec<&str> = miss.iter().map(|a| a.overview.handle()).collect();
    assert_eq!(handles, vec!["trailhead", "mayaeats", "nofields"]);
}

#[test]
fn stats_for_export() {
    let stats = account_stats(&food_account());
    assert_eq!(stats.posts, 4);
    assert_eq!(stats.hashtags, 8);
    assert_eq!(stats.total_likes, 3000);
    assert_eq!(stats.total_comments, 160);
}
