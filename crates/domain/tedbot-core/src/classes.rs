//! Merging of conditional utility-class lists.
//!
//! Inputs that are falsy are dropped. Among the rest, exact duplicates and
//! classes that set the same property under the same variants keep only their
//! last occurrence, so later classes override earlier ones.

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue {
    Class(String),
    Skip,
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        Self::Class(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        Self::Class(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        Self::Class(value.clone())
    }
}

/// A bare boolean never names a class.
impl From<bool> for ClassValue {
    fn from(_: bool) -> Self {
        Self::Skip
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Skip)
    }
}

impl From<(&str, bool)> for ClassValue {
    fn from((class, enabled): (&str, bool)) -> Self {
        if enabled {
            class.into()
        } else {
            Self::Skip
        }
    }
}

/// Builds a merged class string from mixed inputs: `cn!("p-2", active.then_some("p-4"))`.
#[macro_export]
macro_rules! cn {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::classes::ClassValue> =
            ::std::vec![$($crate::classes::ClassValue::from($value)),*];
        $crate::classes::merge_classes(values)
    }};
}

pub fn merge_classes<I, T>(inputs: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<ClassValue>,
{
    let values: Vec<String> = inputs
        .into_iter()
        .filter_map(|v| match v.into() {
            ClassValue::Class(s) => Some(s),
            ClassValue::Skip => None,
        })
        .collect();
    let tokens: Vec<&str> = values.iter().flat_map(|s| s.split_whitespace()).collect();

    let mut seen_exact = HashSet::new();
    let mut seen_groups: HashSet<(String, &'static str)> = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());

    for raw in tokens.into_iter().rev() {
        if !seen_exact.insert(raw) {
            continue;
        }
        if let Some((modifier, group)) = conflict_key(raw) {
            if seen_groups.contains(&(modifier.clone(), group)) {
                continue;
            }
            for g in std::iter::once(group).chain(overridden_by(group).iter().copied()) {
                seen_groups.insert((modifier.clone(), g));
            }
        }
        kept.push(raw);
    }

    kept.reverse();
    kept.join(" ")
}

fn conflict_key(raw: &str) -> Option<(String, &'static str)> {
    let (mut variants, base) = split_variants(raw);
    let (base, important) = match (base.strip_prefix('!'), base.strip_suffix('!')) {
        (Some(b), _) | (None, Some(b)) => (b, true),
        (None, None) => (base, false),
    };
    let base = base.strip_prefix('-').unwrap_or(base);
    let group = classify(base)?;

    variants.sort_unstable();
    let mut modifier = variants.join(":");
    if important {
        modifier.push('!');
    }
    Some((modifier, group))
}

fn split_variants(raw: &str) -> (Vec<&str>, &str) {
    let mut depth = 0usize;
    let mut start = 0;
    let mut variants = Vec::new();
    for (i, c) in raw.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                variants.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    (variants, &raw[start..])
}

const KEYWORDS: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("table", "display"),
    ("contents", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("flex-row", "flex-direction"),
    ("flex-row-reverse", "flex-direction"),
    ("flex-col", "flex-direction"),
    ("flex-col-reverse", "flex-direction"),
    ("flex-wrap", "flex-wrap"),
    ("flex-wrap-reverse", "flex-wrap"),
    ("flex-nowrap", "flex-wrap"),
    ("flex-1", "flex"),
    ("flex-auto", "flex"),
    ("flex-initial", "flex"),
    ("flex-none", "flex"),
    ("grow", "grow"),
    ("shrink", "shrink"),
    ("border", "border-width"),
    ("rounded", "rounded"),
    ("shadow", "shadow"),
    ("ring", "ring-width"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("truncate", "text-overflow"),
];

// Longer prefixes before the prefixes they extend.
const PREFIXES: &[(&str, &str)] = &[
    ("inset-x", "inset-x"),
    ("inset-y", "inset-y"),
    ("inset", "inset"),
    ("top", "top"),
    ("right", "right"),
    ("bottom", "bottom"),
    ("left", "left"),
    ("z", "z"),
    ("px", "px"),
    ("py", "py"),
    ("pt", "pt"),
    ("pr", "pr"),
    ("pb", "pb"),
    ("pl", "pl"),
    ("ps", "ps"),
    ("pe", "pe"),
    ("p", "p"),
    ("mx", "mx"),
    ("my", "my"),
    ("mt", "mt"),
    ("mr", "mr"),
    ("mb", "mb"),
    ("ml", "ml"),
    ("ms", "ms"),
    ("me", "me"),
    ("m", "m"),
    ("min-w", "min-w"),
    ("min-h", "min-h"),
    ("max-w", "max-w"),
    ("max-h", "max-h"),
    ("size", "size"),
    ("w", "w"),
    ("h", "h"),
    ("gap-x", "gap-x"),
    ("gap-y", "gap-y"),
    ("gap", "gap"),
    ("overflow-x", "overflow-x"),
    ("overflow-y", "overflow-y"),
    ("overflow", "overflow"),
    ("opacity", "opacity"),
    ("shadow", "shadow"),
    ("items", "align-items"),
    ("justify", "justify-content"),
    ("grow", "grow"),
    ("shrink", "shrink"),
    ("basis", "basis"),
    ("leading", "leading"),
    ("tracking", "tracking"),
    ("cursor", "cursor"),
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const ROUNDED_SIDES: &[&str] = &[
    "t", "r", "b", "l", "tl", "tr", "br", "bl", "s", "e", "ss", "se", "es", "ee",
];

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

fn classify(base: &str) -> Option<&'static str> {
    if let Some((_, group)) = KEYWORDS.iter().find(|(k, _)| *k == base) {
        return Some(*group);
    }

    if let Some(value) = base.strip_prefix("text-") {
        return Some(if FONT_SIZES.contains(&value) {
            "font-size"
        } else if TEXT_ALIGN.contains(&value) {
            "text-align"
        } else {
            "text-color"
        });
    }
    if let Some(value) = base.strip_prefix("bg-") {
        return Some(match value {
            "fixed" | "local" | "scroll" => "bg-attachment",
            "auto" | "cover" | "contain" => "bg-size",
            _ => "bg-color",
        });
    }
    if let Some(value) = base.strip_prefix("border-") {
        let side = value.split('-').next().unwrap_or_default();
        if ["x", "y", "t", "r", "b", "l", "s", "e"].contains(&side) {
            return None;
        }
        return Some(if BORDER_STYLES.contains(&value) {
            "border-style"
        } else if is_number(value) {
            "border-width"
        } else {
            "border-color"
        });
    }
    if let Some(value) = base.strip_prefix("font-") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            "font-weight"
        } else {
            "font-family"
        });
    }
    if let Some(value) = base.strip_prefix("ring-") {
        return Some(if is_number(value) {
            "ring-width"
        } else if value == "inset" {
            "ring-inset"
        } else {
            "ring-color"
        });
    }
    if let Some(value) = base.strip_prefix("rounded-") {
        let side = value.split('-').next().unwrap_or_default();
        if ROUNDED_SIDES.contains(&side) {
            return None;
        }
        return Some("rounded");
    }

    PREFIXES
        .iter()
        .find(|(prefix, _)| {
            base.strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('-') && rest.len() > 1)
        })
        .map(|(_, group)| *group)
}

/// Groups a class of `group` also overrides when it comes later.
fn overridden_by(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "overflow" => &["overflow-x", "overflow-y"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_falsy_entries_and_keeps_order() {
        let merged = merge_classes([ClassValue::from("a"), false.into(), "b".into()]);
        assert_eq!(merged, "a b");
    }

    #[test]
    fn later_class_in_the_same_group_wins() {
        assert_eq!(merge_classes(["p-2 text-sm", "p-4"]), "text-sm p-4");
        assert_eq!(merge_classes(["text-red-500", "text-lg"]), "text-red-500 text-lg");
        assert_eq!(merge_classes(["block", "hidden"]), "hidden");
    }

    #[test]
    fn side_refinements_only_override_forwards() {
        assert_eq!(merge_classes(["p-4 px-2"]), "p-4 px-2");
        assert_eq!(merge_classes(["px-2 p-4"]), "p-4");
        assert_eq!(merge_classes(["mx-1 ml-3"]), "mx-1 ml-3");
    }

    #[test]
    fn variants_and_important_form_separate_groups() {
        assert_eq!(
            merge_classes(["bg-red-500 hover:bg-blue-500", "bg-green-500"]),
            "hover:bg-blue-500 bg-green-500"
        );
        assert_eq!(merge_classes(["!p-2 p-4"]), "!p-2 p-4");
        assert_eq!(
            merge_classes(["md:hover:p-1", "hover:md:p-2"]),
            "hover:md:p-2"
        );
    }

    #[test]
    fn exact_duplicates_collapse_to_the_last() {
        assert_eq!(merge_classes(["a b", "a"]), "b a");
    }

    #[test]
    fn unknown_classes_pass_through() {
        assert_eq!(merge_classes(["peer group", "custom-x"]), "peer group custom-x");
    }

    #[test]
    fn rounded_corners_do_not_clash_with_rounded() {
        assert_eq!(
            merge_classes(["rounded-lg rounded-t-none"]),
            "rounded-lg rounded-t-none"
        );
        assert_eq!(merge_classes(["rounded rounded-md"]), "rounded-md");
    }

    #[test]
    fn macro_accepts_mixed_inputs() {
        let active = true;
        let disabled: Option<&str> = None;
        let merged = crate::cn!(
            "px-2 py-1",
            ("bg-primary", active),
            ("opacity-50", false),
            disabled,
            Some("py-2"),
        );
        assert_eq!(merged, "px-2 bg-primary py-2");
    }
}
