//! Segment normalizer.
//!
//! Walks a raw identifier left to right and re-emits every dot-separated
//! segment wrapped in the canonical `(prefix, suffix)` pair:
//!
//! | input            | `"`/`"` output     | `[`/`]` output   |
//! |------------------|--------------------|------------------|
//! | `users`          | `"users"`          | `[users]`        |
//! | `public.users`   | `"public"."users"` | `[public].[users]` |
//! | `` `t`.`c` ``    | `"t"."c"`          | `[t].[c]`        |
//! | `"t".c`          | `"t"."c"`          | `["t"].[c]`      |
//! | `*`              | `*`                | `*`              |
//!
//! A segment that opens with the canonical prefix or with a backtick is
//! treated as already quoted and copied up to its matching close delimiter.
//! Everything else is copied up to the next `.`. Nothing is escaped: a
//! quote character in the middle of an unquoted segment (`fo"o`) is copied
//! as-is, and an unterminated quoted segment runs to the end of the input.

use crate::dialect::helpers::BACKTICK;

/// Normalize `value` into a freshly allocated string.
pub fn normalize(value: &str, prefix: char, suffix: char) -> String {
    let mut buf = String::with_capacity(value.len() + 4);
    normalize_into(&mut buf, value, prefix, suffix);
    buf
}

/// Normalize `value`, appending the result to `buf`.
///
/// Surrounding whitespace is trimmed first. Empty input appends nothing and
/// a lone `*` is appended unquoted.
pub fn normalize_into(buf: &mut String, value: &str, prefix: char, suffix: char) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    if value == "*" {
        buf.push('*');
        return;
    }

    let mut chars = value.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c == '.' {
            buf.push('.');
            chars.next();
        } else if c == prefix || c == BACKTICK {
            // Canonical prefix wins when the dialect itself uses backticks.
            let close = if c == prefix { suffix } else { BACKTICK };
            chars.next();

            buf.push(prefix);
            for ch in chars.by_ref() {
                if ch == close {
                    break;
                }
                buf.push(ch);
            }
            buf.push(suffix);
        } else {
            buf.push(prefix);
            while let Some(&ch) = chars.peek() {
                if ch == '.' {
                    break;
                }
                buf.push(ch);
                chars.next();
            }
            buf.push(suffix);
        }
    }
}
