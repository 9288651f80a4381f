//! Property tests for job name length bounds.
//!
//! Whatever the orchestrator hands over, the source list never exceeds its
//! cap and the final name never exceeds the job name cap.

use casparian_jobname::{abbreviate, JobNamer, NamingConfig, SourceDescriptor, StepMetadata};
use proptest::prelude::*;

fn descriptor_strategy() -> impl Strategy<Value = SourceDescriptor> {
    let leaf = prop_oneof![
        "[a-z_/]{0,40}".prop_map(|id| SourceDescriptor::generic(id)),
        "(/[a-z0-9_]{1,12}){1,4}".prop_map(|id| SourceDescriptor::path(id)),
        "[a-z]{1,8}_[0-9]{1,4}_[A-Z0-9]{32}"
            .prop_map(|id| SourceDescriptor::generic(id).temporary()),
        Just(SourceDescriptor::generic("x").without_identifier()),
    ];
    leaf.prop_recursive(2, 8, 4, |inner| {
        prop::collection::vec(inner, 0..4)
            .prop_map(|children| SourceDescriptor::composite(children))
    })
}

fn step_strategy() -> impl Strategy<Value = StepMetadata> {
    (
        "[A-Za-z]{1,30}",
        1u32..50,
        1u32..50,
        prop::collection::vec(descriptor_strategy(), 0..8),
        prop::collection::vec(descriptor_strategy(), 0..8),
    )
        .prop_map(|(pipeline_name, step_index, step_count, sources, sinks)| StepMetadata {
            pipeline_name,
            step_index,
            step_count,
            sources,
            sinks,
        })
}

proptest! {
    #[test]
    fn prop_name_never_exceeds_cap(step in step_strategy()) {
        let namer = JobNamer::default();
        let name = namer.format_job_name(&step);
        prop_assert!(name.chars().count() <= 175);
        prop_assert!(namer.source_list(&step).chars().count() <= 60);
        prop_assert!(name.starts_with(&step.pipeline_name));
    }

    #[test]
    fn prop_name_is_deterministic(step in step_strategy()) {
        let namer = JobNamer::default();
        prop_assert_eq!(namer.format_job_name(&step), namer.format_job_name(&step.clone()));
    }

    #[test]
    fn prop_custom_caps_hold(
        step in step_strategy(),
        max_job in 4usize..200,
        max_sources in 4usize..80,
    ) {
        let namer = JobNamer::new(NamingConfig {
            max_job_name_len: max_job,
            max_source_list_len: max_sources,
            ..NamingConfig::default()
        }).unwrap();
        prop_assert!(namer.format_job_name(&step).chars().count() <= max_job);
        prop_assert!(namer.source_list(&step).chars().count() <= max_sources);
    }

    #[test]
    fn prop_abbreviate_exact_length_and_idempotent(text in ".{0,120}", max_len in 0usize..100) {
        let once = abbreviate(&text, max_len, "...").into_owned();
        let len = text.chars().count();
        if len <= max_len {
            prop_assert_eq!(&once, &text);
        } else {
            prop_assert_eq!(once.chars().count(), max_len);
            if max_len > 3 {
                prop_assert!(once.ends_with("..."));
            }
        }
        let twice = abbreviate(&once, max_len, "...");
        prop_assert_eq!(&*twice, once.as_str());
    }
}
