//! Internal grammar helpers.
//!
//! Holds the compiled regexes for every canonical string form and the
//! small routines that turn their captures into component values. The
//! variant types call into this module; range checking stays with them.

use regex::Regex;
use std::sync::LazyLock;
use tint_common::{InvalidColorValue, Result};

/// Runs of space or tab.
const WS: &str = r"[ \t]*";
/// ASCII digits only; `\d` would also take other Unicode digits.
const INT: &str = r"(-?[0-9]+)";
const FLOAT: &str = r"(-?(?:[0-9]+\.?[0-9]*|\.[0-9]+))";

/// Build `^ws name ws ( ws arg ws , ... ) ws$` for a functional notation.
fn function_regex(name: &str, args: &[&str]) -> Regex {
    let sep = format!("{WS},{WS}");
    let pattern = format!(
        r"^{WS}{name}{WS}\({WS}{}{WS}\){WS}$",
        args.join(&sep)
    );
    Regex::new(&pattern).expect("function color pattern is valid")
}

pub(crate) static RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| function_regex("rgb", &[INT, INT, INT]));

pub(crate) static RGBA_RE: LazyLock<Regex> =
    LazyLock::new(|| function_regex("rgba", &[INT, INT, INT, FLOAT]));

pub(crate) static HSL_RE: LazyLock<Regex> =
    LazyLock::new(|| function_regex("hsl", &[INT, INT, INT]));

pub(crate) static HSLA_RE: LazyLock<Regex> =
    LazyLock::new(|| function_regex("hsla", &[INT, INT, INT, FLOAT]));

/// Regex for hex color: #RGB or #RRGGBB.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})[ \t]*$")
        .expect("hex color pattern is valid")
});

/// Match `s` against a functional notation and return its `N` arguments.
pub(crate) fn match_function<'s, const N: usize>(
    re: &Regex,
    format: &'static str,
    s: &'s str,
) -> Result<[&'s str; N]> {
    let caps = re.captures(s).ok_or_else(|| {
        tracing::debug!(format, input = s, "rejected color string");
        InvalidColorValue::malformed_string(format, s)
    })?;

    let mut args = [""; N];
    for (i, arg) in args.iter_mut().enumerate() {
        *arg = caps.get(i + 1).map_or("", |m| m.as_str());
    }
    Ok(args)
}

/// Parse an integer argument. Digit runs too long for `i64` are reported
/// as out of range rather than malformed.
pub(crate) fn parse_integer(component: &'static str, arg: &str) -> Result<i64> {
    arg.parse::<i64>().map_err(|_| {
        InvalidColorValue::out_of_range(
            component,
            arg,
            crate::validation::CHANNEL_MIN,
            crate::validation::CHANNEL_MAX,
        )
    })
}

/// Parse a float argument already shaped by [`FLOAT`]. Errors cite the
/// whole input `s`, not just the argument.
pub(crate) fn parse_float(format: &'static str, s: &str, arg: &str) -> Result<f64> {
    arg.parse::<f64>()
        .map_err(|_| InvalidColorValue::malformed_string(format, s))
}

/// Split `#RGB` / `#RRGGBB` into three two-digit pairs. Shorthand digits
/// are doubled (`#f00` -> `ff`, `00`, `00`).
pub(crate) fn split_hex(s: &str) -> Result<[String; 3]> {
    let caps = HEX_RE.captures(s).ok_or_else(|| {
        tracing::debug!(format = "hex", input = s, "rejected color string");
        InvalidColorValue::malformed_string("hex", s)
    })?;
    let digits = &caps[1];

    let pair = |i: usize| -> String {
        if digits.len() == 3 {
            digits[i..i + 1].repeat(2)
        } else {
            digits[i * 2..i * 2 + 2].to_string()
        }
    };
    Ok([pair(0), pair(1), pair(2)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_tolerates_whitespace_between_tokens() {
        let args: [&str; 3] =
            match_function(&RGB_RE, "rgb", " \trgb ( 1 ,\t2 , 3 ) \t").unwrap();
        assert_eq!(args, ["1", "2", "3"]);
    }

    #[test]
    fn function_captures_float_alpha() {
        let args: [&str; 4] = match_function(&RGBA_RE, "rgba", "rgba(1,2,3,.25)").unwrap();
        assert_eq!(args, ["1", "2", "3", ".25"]);
        assert_eq!(parse_float("rgba", "rgba(1,2,3,.25)", args[3]).unwrap(), 0.25);
    }

    #[test]
    fn function_keeps_negative_sign_for_range_errors() {
        let args: [&str; 3] = match_function(&HSL_RE, "hsl", "hsl(-5,0,0)").unwrap();
        assert_eq!(parse_integer("hue", args[0]).unwrap(), -5);
    }

    #[test]
    fn function_rejects_other_shapes() {
        let bad = [
            "rgb(1,2,3",
            "rgb 1,2,3)",
            "abc rgb(1,2,3) abc",
            "rgb(1,2)",
            "rgb(1,2,3,4)",
            "rgb(1.5,2,3)",
            "rgb(a,2,3)",
            "RGB(1,2,3)",
            "rgba(1,2,3,0.5)",
            "",
        ];
        for s in bad {
            let res: Result<[&str; 3]> = match_function(&RGB_RE, "rgb", s);
            assert!(res.is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        for s in ["rgb(\u{0665},1,1)", "rgb(1,2,\u{0663})", "rgb(\u{FF11},0,0)"] {
            let res: Result<[&str; 3]> = match_function(&RGB_RE, "rgb", s);
            assert!(res.is_err(), "accepted {s:?}");
        }
        let res: Result<[&str; 4]> = match_function(&RGBA_RE, "rgba", "rgba(1,2,3,\u{0660}.5)");
        assert!(res.is_err());
    }

    #[test]
    fn float_errors_cite_the_whole_input() {
        let err = parse_float("rgba", "rgba(1,2,3,x)", "x").unwrap_err();
        assert_eq!(err, InvalidColorValue::malformed_string("rgba", "rgba(1,2,3,x)"));
    }

    #[test]
    fn huge_integer_is_out_of_range() {
        let err = parse_integer("red", "99999999999999999999").unwrap_err();
        assert!(matches!(err, InvalidColorValue::OutOfRange { .. }));
    }

    #[test]
    fn split_hex_long_and_short() {
        assert_eq!(split_hex("#379bff").unwrap(), ["37", "9b", "ff"]);
        assert_eq!(split_hex("  #F00  ").unwrap(), ["FF", "00", "00"]);
    }

    #[test]
    fn split_hex_rejects_malformed() {
        for s in ["379bff", "#37 9bff", "#37", "#379b", "#379bff00", "#ggg", "x#fff"] {
            assert!(split_hex(s).is_err(), "accepted {s:?}");
        }
    }
}
