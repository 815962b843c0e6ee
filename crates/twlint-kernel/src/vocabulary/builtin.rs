//! Hand-written fallback vocabulary.
//!
//! Used when no generated vocabulary is configured. Scales (spacing, color
//! shades, opacity steps) are expanded here rather than listed one by one.

/// Prefixes that accept an arbitrary value: `h-[50px]`, `bg-[#fff]`.
pub const DYNAMIC_PREFIXES: &[&str] = &[
    // Sizing
    "w", "h", "size", "min-w", "min-h", "max-w", "max-h",
    // Margin
    "m", "mx", "my", "mt", "mr", "mb", "ml",
    // Padding
    "p", "px", "py", "pt", "pr", "pb", "pl",
    // Typography
    "text", "leading", "tracking", "indent", "line-clamp",
    // Color
    "color", "bg", "bg-opacity", "text-opacity",
    // Border
    "border", "border-x", "border-y", "border-t", "border-r", "border-b", "border-l",
    "border-color", "border-opacity",
    // Radius
    "rounded", "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
    "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
    // Position
    "top", "right", "bottom", "left", "inset", "inset-x", "inset-y", "z",
    // Layout
    "basis", "gap", "gap-x", "gap-y",
    // Effects and transforms
    "opacity", "shadow", "scale", "scale-x", "scale-y", "rotate", "translate-x", "translate-y",
];

const DISPLAY: &[&str] = &[
    "block", "inline-block", "inline", "flex", "inline-flex", "grid", "inline-grid", "hidden",
    "table", "inline-table", "table-caption", "table-cell", "table-column",
    "table-column-group", "table-footer-group", "table-header-group", "table-row-group",
    "table-row", "flow-root", "contents", "list-item",
];

const POSITION: &[&str] = &[
    "static", "fixed", "absolute", "relative", "sticky", "isolate", "isolation-auto",
    "visible", "invisible", "collapse",
];

const FLEXBOX: &[&str] = &[
    "flex-row", "flex-col", "flex-row-reverse", "flex-col-reverse",
    "flex-wrap", "flex-nowrap", "flex-wrap-reverse",
    "flex-1", "flex-auto", "flex-initial", "flex-none",
    "grow", "grow-0", "shrink", "shrink-0",
    "items-start", "items-end", "items-center", "items-baseline", "items-stretch",
    "justify-start", "justify-end", "justify-center", "justify-between", "justify-around",
    "justify-evenly", "justify-stretch",
    "self-auto", "self-start", "self-end", "self-center", "self-stretch",
];

/// Project-specific shorthands.
const CUSTOM: &[&str] = &[
    "flex-cc", "flex-ce", "flex-cb", "flex-sb", "flex-cs", "flex-ca", "flex-ss", "flex-sc",
    "flex-ee", "absolute-center", "position-cc", "position-x-c", "position-y-c",
];

const OVERFLOW: &[&str] = &[
    "overflow-auto", "overflow-hidden", "overflow-clip", "overflow-visible", "overflow-scroll",
    "overflow-x-auto", "overflow-y-auto", "overflow-x-hidden", "overflow-y-hidden",
    "overflow-x-scroll", "overflow-y-scroll",
];

const TYPOGRAPHY: &[&str] = &[
    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl",
    "text-4xl", "text-5xl", "text-6xl", "text-7xl", "text-8xl", "text-9xl",
    "text-left", "text-center", "text-right", "text-justify", "text-start", "text-end",
    "font-thin", "font-extralight", "font-light", "font-normal", "font-medium",
    "font-semibold", "font-bold", "font-extrabold", "font-black",
    "leading-none", "leading-tight", "leading-snug", "leading-normal", "leading-relaxed",
    "leading-loose",
    "tracking-tighter", "tracking-tight", "tracking-normal", "tracking-wide",
    "tracking-wider", "tracking-widest",
    "underline", "line-through", "no-underline", "uppercase", "lowercase", "capitalize",
    "normal-case", "italic", "not-italic", "truncate", "whitespace-nowrap", "whitespace-normal",
];

const BORDER: &[&str] = &[
    "border", "border-0", "border-2", "border-4", "border-8",
    "border-t", "border-r", "border-b", "border-l",
    "border-t-0", "border-r-0", "border-b-0", "border-l-0",
    "border-t-2", "border-r-2", "border-b-2", "border-l-2",
    "border-solid", "border-dashed", "border-dotted", "border-none",
    "rounded", "rounded-none", "rounded-sm", "rounded-md", "rounded-lg", "rounded-xl",
    "rounded-2xl", "rounded-3xl", "rounded-full",
];

const EFFECTS: &[&str] = &[
    "shadow", "shadow-sm", "shadow-md", "shadow-lg", "shadow-xl", "shadow-2xl",
    "shadow-inner", "shadow-none",
    "cursor-auto", "cursor-default", "cursor-pointer", "cursor-wait", "cursor-text",
    "cursor-move", "cursor-not-allowed",
    "pointer-events-none", "pointer-events-auto",
    "select-none", "select-text", "select-all", "select-auto",
    "transition", "transition-none", "transition-all", "transition-colors",
    "transition-opacity", "transition-transform",
    "ease-linear", "ease-in", "ease-out", "ease-in-out",
];

const SIZING_EXTRAS: &[&str] = &[
    "min-w-0", "min-w-full", "min-h-0", "min-h-full", "min-h-screen",
    "max-w-none", "max-w-xs", "max-w-sm", "max-w-md", "max-w-lg", "max-w-xl", "max-w-2xl",
    "max-w-full", "max-h-full", "max-h-screen",
    "w-1/2", "w-1/3", "w-2/3", "w-1/4", "w-3/4",
];

const SPACING_SCALE: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "8", "10", "12", "16", "20", "24", "32", "40", "48",
    "56", "64", "px",
];

const SPACING_FAMILIES: &[&str] = &[
    "p", "px", "py", "pt", "pr", "pb", "pl", "m", "mx", "my", "mt", "mr", "mb", "ml", "gap",
];

const MARGIN_FAMILIES: &[&str] = &["m", "mx", "my", "mt", "mr", "mb", "ml"];

const INSET_FAMILIES: &[&str] = &["inset", "inset-x", "inset-y", "top", "right", "bottom", "left"];

const SIZE_KEYWORDS: &[&str] = &["auto", "full", "screen", "min", "max", "fit"];

const COLOR_FAMILIES: &[&str] = &["bg", "text", "border"];

const PALETTE: &[&str] = &["gray", "red", "blue", "green", "yellow"];

const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

const OPACITY_STEPS: &[&str] = &[
    "0", "5", "10", "20", "25", "30", "40", "50", "60", "70", "75", "80", "90", "95", "100",
];

const Z_STEPS: &[&str] = &["0", "10", "20", "30", "40", "50", "auto"];

/// Every static class in the fallback vocabulary.
pub fn static_names() -> Vec<String> {
    let mut names: Vec<String> = [
        DISPLAY, POSITION, FLEXBOX, CUSTOM, OVERFLOW, TYPOGRAPHY, BORDER, EFFECTS, SIZING_EXTRAS,
    ]
    .concat()
    .into_iter()
    .map(str::to_string)
    .collect();

    expand(&mut names, SPACING_FAMILIES, SPACING_SCALE);
    expand(&mut names, MARGIN_FAMILIES, &["auto"]);
    expand(&mut names, INSET_FAMILIES, &["0", "1", "2", "3", "4", "auto"]);
    expand(&mut names, &["w", "h"], SPACING_SCALE);
    expand(&mut names, &["w", "h"], SIZE_KEYWORDS);
    expand(&mut names, &["opacity"], OPACITY_STEPS);
    expand(&mut names, &["z"], Z_STEPS);

    for family in COLOR_FAMILIES {
        expand(&mut names, &[family], &["transparent", "black", "white"]);
        for color in PALETTE {
            let prefix = format!("{family}-{color}");
            expand(&mut names, &[prefix.as_str()], SHADES);
        }
    }

    names
}

fn expand(names: &mut Vec<String>, families: &[&str], steps: &[&str]) {
    for family in families {
        for step in steps {
            names.push(format!("{family}-{step}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansions_include_scales() {
        let names = static_names();
        for expected in [
            "p-4", "px-px", "m-auto", "gap-8", "w-full", "h-screen", "opacity-50", "z-auto",
            "bg-gray-100", "text-blue-950", "border-red-500", "top-0", "inset-x-auto",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn no_static_name_contains_brackets_or_whitespace() {
        for name in static_names() {
            assert!(!name.contains(['[', ']']), "{name}");
            assert!(!name.contains(char::is_whitespace), "{name}");
        }
    }

    #[test]
    fn prefixes_are_letters_and_hyphens() {
        for prefix in DYNAMIC_PREFIXES {
            assert!(
                prefix.chars().all(|c| c.is_ascii_alphabetic() || c == '-'),
                "{prefix}"
            );
        }
    }
}
