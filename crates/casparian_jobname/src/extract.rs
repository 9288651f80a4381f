//! Per-endpoint identifier extraction.

use crate::canonical::resolve_path_name;
use crate::defaults::COMPOSITE_SEPARATOR;
use crate::descriptor::{CompositeMember, DescriptorKind, SourceDescriptor};

/// Caller-supplied resolver for generic endpoints.
///
/// Receives the descriptor and the strip-suffix flag. Returning `None`
/// falls through to the canonical path-name resolution.
pub type FallbackResolver = dyn Fn(&SourceDescriptor, bool) -> Option<String> + Send + Sync;

/// Turns one descriptor into its display identifier.
#[derive(Clone, Copy, Default)]
pub struct IdentifierExtractor<'a> {
    fallback: Option<&'a FallbackResolver>,
}

impl<'a> IdentifierExtractor<'a> {
    pub fn new() -> Self {
        Self { fallback: None }
    }

    pub fn with_fallback(fallback: &'a FallbackResolver) -> Self {
        Self {
            fallback: Some(fallback),
        }
    }

    /// Display identifier of `descriptor`.
    ///
    /// - Synthetic endpoints yield their fixed kind tag; the identifier is
    ///   never read.
    /// - Composites join their members' identifiers with `+`, in member
    ///   order. Foreign members are skipped, so a composite with nothing
    ///   resolvable yields an empty string.
    /// - Everything else goes through the fallback resolver (generic only)
    ///   and then [`resolve_path_name`].
    pub fn extract(&self, descriptor: &SourceDescriptor, strip_temp_suffix: bool) -> String {
        match &descriptor.kind {
            DescriptorKind::Synthetic(kind) => kind.as_str().to_string(),
            DescriptorKind::Composite(children) => {
                let mut parts = Vec::with_capacity(children.len());
                for child in children {
                    match child {
                        CompositeMember::Descriptor(inner) => {
                            parts.push(self.extract(inner, strip_temp_suffix));
                        }
                        CompositeMember::Foreign { type_name } => {
                            tracing::trace!(
                                type_name = %type_name,
                                "skipping foreign composite member"
                            );
                        }
                    }
                }
                parts.join(COMPOSITE_SEPARATOR)
            }
            DescriptorKind::Generic => {
                if let Some(fallback) = self.fallback {
                    if let Some(name) = fallback(descriptor, strip_temp_suffix) {
                        return name;
                    }
                    tracing::debug!(
                        identifier = ?descriptor.identifier(),
                        "fallback resolver declined; using path name"
                    );
                }
                resolve_path_name(descriptor, strip_temp_suffix)
            }
            DescriptorKind::Path => resolve_path_name(descriptor, strip_temp_suffix),
        }
    }
}

/// Extract with the default rules and no fallback resolver.
pub fn extract_identifier(descriptor: &SourceDescriptor, strip_temp_suffix: bool) -> String {
    IdentifierExtractor::new().extract(descriptor, strip_temp_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SyntheticKind;

    const SUFFIX: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ012345";

    #[test]
    fn test_synthetic_ignores_identifier() {
        let null = SourceDescriptor::synthetic(SyntheticKind::Null, Some("/tmp/x_1_abc".into()));
        assert_eq!(extract_identifier(&null, true), "NullSink");

        let memory = SourceDescriptor::synthetic(SyntheticKind::Memory, None).temporary();
        assert_eq!(extract_identifier(&memory, false), "MemorySource");
    }

    #[test]
    fn test_composite_joins_children_in_order() {
        let multi = SourceDescriptor::composite([
            SourceDescriptor::generic("x"),
            SourceDescriptor::generic("y"),
        ]);
        assert_eq!(extract_identifier(&multi, true), "x+y");
    }

    #[test]
    fn test_composite_skips_foreign_members() {
        let multi = SourceDescriptor::composite(vec![
            CompositeMember::Foreign {
                type_name: "LegacyScheme".into(),
            },
            SourceDescriptor::generic("z").into(),
        ]);
        assert_eq!(extract_identifier(&multi, true), "z");
    }

    #[test]
    fn test_degenerate_composites() {
        let empty = SourceDescriptor::composite(Vec::<CompositeMember>::new());
        assert_eq!(extract_identifier(&empty, true), "");

        let only_foreign = SourceDescriptor::composite(vec![CompositeMember::Foreign {
            type_name: "Opaque".into(),
        }]);
        assert_eq!(extract_identifier(&only_foreign, true), "");

        let single = SourceDescriptor::composite([SourceDescriptor::path("/a/b")]);
        assert_eq!(extract_identifier(&single, true), "b");
    }

    #[test]
    fn test_composite_passes_strip_flag_down() {
        let child = SourceDescriptor::path(format!("/tmp/words_3_{}", SUFFIX)).temporary();
        let nested = SourceDescriptor::composite([
            SourceDescriptor::composite([child]),
            SourceDescriptor::synthetic(SyntheticKind::Memory, None),
        ]);
        assert_eq!(extract_identifier(&nested, true), "words+MemorySource");
        assert_eq!(
            extract_identifier(&nested, false),
            format!("words_3_{}+MemorySource", SUFFIX)
        );
    }

    #[test]
    fn test_fallback_only_for_generic() {
        let resolver = |d: &SourceDescriptor, _strip: bool| {
            d.identifier()
                .and_then(|id| id.strip_prefix("kafka:"))
                .map(|topic| format!("topic:{}", topic))
        };
        let extractor = IdentifierExtractor::with_fallback(&resolver);

        assert_eq!(
            extractor.extract(&SourceDescriptor::generic("kafka:clicks"), true),
            "topic:clicks"
        );
        // declined
        assert_eq!(
            extractor.extract(&SourceDescriptor::generic("/plain/name"), true),
            "/plain/name"
        );
        // not consulted for path-backed endpoints
        assert_eq!(
            extractor.extract(&SourceDescriptor::path("kafka:clicks"), true),
            "kafka:clicks"
        );
    }

    #[test]
    fn test_fallback_reaches_composite_children() {
        let resolver = |_: &SourceDescriptor, strip: bool| Some(format!("custom-{}", strip));
        let extractor = IdentifierExtractor::with_fallback(&resolver);
        let multi = SourceDescriptor::composite([
            SourceDescriptor::generic("a"),
            SourceDescriptor::path("/b"),
        ]);
        assert_eq!(extractor.extract(&multi, true), "custom-true+b");
    }
}
