use crate::models::ArticleTask;

/// Priority assigned to tasks that mention none of the priority topics
pub const UNMATCHED_PRIORITY: usize = 999;

/// Index of the first priority topic mentioned in either title
pub fn topic_priority(task: &ArticleTask, priority_topics: &[&str]) -> usize {
    let titles = task.combined_titles();
    priority_topics
        .iter()
        .position(|topic| titles.contains(topic))
        .unwrap_or(UNMATCHED_PRIORITY)
}

/// Pick up to `limit` incomplete tasks, most valuable first.
///
/// Ordering is by topic priority, then volume tier. The sort is stable so
/// tasks with equal keys keep their table order.
pub fn select_pending<'a>(
    tasks: &'a [ArticleTask],
    priority_topics: &[&str],
    limit: usize,
) -> Vec<&'a ArticleTask> {
    let mut pending: Vec<&ArticleTask> = tasks.iter().filter(|task| !task.is_complete).collect();

    pending.sort_by_key(|task| (topic_priority(task, priority_topics), task.volume.rank()));
    pending.truncate(limit);
    pending
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Variant, VolumeTier};
    use proptest::prelude::*;

    fn task(title: &str, volume: VolumeTier, slug: &str, done: bool) -> ArticleTask {
        ArticleTask {
            pillar_category: "Cluster".to_string(),
            title_primary: format!("{}の比較", title),
            title_secondary: format!("{} Comparison", title),
            keyword_primary: title.to_string(),
            keyword_secondary: title.to_string(),
            volume,
            intent: "Commercial".to_string(),
            slug: slug.to_string(),
            is_complete: done,
        }
    }

    fn slugs(selected: &[&ArticleTask]) -> Vec<String> {
        selected.iter().map(|t| t.slug.clone()).collect()
    }

    #[test]
    fn test_topic_priority_uses_first_listed_topic() {
        let topics = Variant::Basic.priority_topics();
        let t = task("HubSpot と 1Password", VolumeTier::Low, "mix", false);
        assert_eq!(topic_priority(&t, topics), 1);
    }

    #[test]
    fn test_topic_priority_matches_secondary_title() {
        let mut t = task("CRM", VolumeTier::Low, "crm", false);
        t.title_secondary = "Bright Data Review".to_string();
        assert_eq!(topic_priority(&t, Variant::Basic.priority_topics()), 0);
    }

    #[test]
    fn test_unmatched_priority_sentinel() {
        let t = task("Oxylabs", VolumeTier::High, "ox", false);
        assert_eq!(topic_priority(&t, Variant::Basic.priority_topics()), UNMATCHED_PRIORITY);
    }

    #[test]
    fn test_select_orders_by_topic_then_volume() {
        let tasks = vec![
            task("Oxylabs", VolumeTier::High, "ox", false),
            task("HubSpot", VolumeTier::Low, "hs", false),
            task("Zyte", VolumeTier::Mid, "zyte", false),
            task("Bright Data", VolumeTier::Low, "bd", false),
            task("Smartproxy", VolumeTier::Unknown, "sp", false),
        ];

        let selected = select_pending(&tasks, Variant::Basic.priority_topics(), 10);

        assert_eq!(slugs(&selected), vec!["bd", "hs", "ox", "zyte", "sp"]);
    }

    #[test]
    fn test_select_skips_complete_and_limits() {
        let tasks = vec![
            task("HubSpot", VolumeTier::High, "hs-done", true),
            task("HubSpot", VolumeTier::Mid, "hs", false),
            task("Oxylabs", VolumeTier::High, "ox", false),
            task("Zyte", VolumeTier::High, "zyte", false),
        ];

        let selected = select_pending(&tasks, Variant::Basic.priority_topics(), 2);

        assert_eq!(slugs(&selected), vec!["hs", "ox"]);
    }

    #[test]
    fn test_select_is_stable_for_equal_keys() {
        let tasks = vec![
            task("A", VolumeTier::Mid, "a", false),
            task("B", VolumeTier::Mid, "b", false),
            task("C", VolumeTier::Mid, "c", false),
        ];

        let selected = select_pending(&tasks, Variant::Basic.priority_topics(), 3);

        assert_eq!(slugs(&selected), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_next_engine_only_prioritized_by_enhanced() {
        let tasks = vec![
            task("Oxylabs", VolumeTier::High, "ox", false),
            task("ネクストエンジン", VolumeTier::Low, "ne", false),
        ];

        let basic = select_pending(&tasks, Variant::Basic.priority_topics(), 2);
        let enhanced = select_pending(&tasks, Variant::Enhanced.priority_topics(), 2);

        assert_eq!(slugs(&basic), vec!["ox", "ne"]);
        assert_eq!(slugs(&enhanced), vec!["ne", "ox"]);
    }

    #[test]
    fn test_select_zero_limit() {
        let tasks = vec![task("HubSpot", VolumeTier::High, "hs", false)];
        assert!(select_pending(&tasks, Variant::Basic.priority_topics(), 0).is_empty());
    }

    fn arb_task() -> impl Strategy<Value = ArticleTask> {
        let titles = prop_oneof![
            Just("Bright Data"),
            Just("1Password"),
            Just("HubSpot"),
            Just("Oxylabs"),
            Just("Notion"),
        ];
        let volumes = prop_oneof![
            Just(VolumeTier::High),
            Just(VolumeTier::Mid),
            Just(VolumeTier::Low),
            Just(VolumeTier::Unknown),
        ];
        (titles, volumes, any::<bool>(), 0u32..10_000)
            .prop_map(|(title, volume, done, id)| task(title, volume, &format!("t{}", id), done))
    }

    proptest! {
        #[test]
        fn prop_selection_is_deterministic(
            tasks in proptest::collection::vec(arb_task(), 0..30),
            limit in 0usize..40,
        ) {
            let topics = Variant::Basic.priority_topics();
            let first = slugs(&select_pending(&tasks, topics, limit));
            let second = slugs(&select_pending(&tasks, topics, limit));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_selection_keys_are_non_decreasing(
            tasks in proptest::collection::vec(arb_task(), 0..30),
            limit in 0usize..40,
        ) {
            let topics = Variant::Basic.priority_topics();
            let selected = select_pending(&tasks, topics, limit);
            let pending = tasks.iter().filter(|t| !t.is_complete).count();

            prop_assert_eq!(selected.len(), pending.min(limit));
            prop_assert!(selected.iter().all(|t| !t.is_complete));
            for pair in selected.windows(2) {
                let a = (topic_priority(pair[0], topics), pair[0].volume.rank());
                let b = (topic_priority(pair[1], topics), pair[1].volume.rank());
                prop_assert!(a <= b);
            }
        }
    }
}
