//! Positional `{n}` templates used by flavor text.

use core::fmt::{Display, Write};

/// Replaces each `{n}` with `args[n]`.
///
/// Placeholders with an out-of-range or non-numeric index are left untouched.
pub fn fill(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .filter(|index| *index < args.len())
                .map(|index| (index, close))
        });
        match placeholder {
            Some((index, close)) => {
                let _ = write!(out, "{}", args[index]);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_positional_placeholders() {
        let text = fill("{0} uses an apple on {1}!\n{1} restores {2} life!", &[
            &"Ann", &"Bo", &10,
        ]);
        assert_eq!(text, "Ann uses an apple on Bo!\nBo restores 10 life!");
    }

    #[test]
    fn leaves_unknown_placeholders() {
        assert_eq!(fill("{3} {x} {", &[&1]), "{3} {x} {");
        assert_eq!(fill("", &[]), "");
    }
}
