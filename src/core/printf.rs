//! Runtime printf-style rendering of `Format` templates
//!
//! Supported verbs: `%v` `%s` `%d` `%f` `%t` `%q` `%x` `%X` and `%%`, with
//! the `-`, `0` and `+` flags, a width and a `.precision`. `0` pads text
//! verbs with zeros too; `-` wins over `0`. Problems never fail the render;
//! they are spelled out inline instead:
//!
//! - missing argument: `%!d(MISSING)`
//! - argument the verb cannot print: `%!d(hello)`
//! - unknown verb: `%!z(value)`
//! - surplus arguments: `%!(EXTRA a, b)` appended at the end

use super::field::FieldValue;
use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    left: bool,
    zero: bool,
    plus: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

pub fn sprintf(template: &str, args: &[&FieldValue]) -> String {
    let mut out = String::with_capacity(template.len() + 8 * args.len());
    let mut chars = template.chars().peekable();
    let mut used = 0;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let spec = parse_spec(&mut chars);
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }

        match args.get(used) {
            Some(arg) => {
                used += 1;
                write_verb(&mut out, verb, &spec, arg);
            }
            None => {
                let _ = write!(out, "%!{}(MISSING)", verb);
            }
        }
    }

    if used < args.len() {
        out.push_str("%!(EXTRA ");
        let extra: Vec<String> = args[used..].iter().map(|a| a.to_string()).collect();
        out.push_str(&extra.join(", "));
        out.push(')');
    }

    out
}

fn parse_spec(chars: &mut Peekable<Chars<'_>>) -> Spec {
    let mut spec = Spec::default();
    while let Some(&flag) = chars.peek() {
        match flag {
            '-' => spec.left = true,
            '0' => spec.zero = true,
            '+' => spec.plus = true,
            _ => break,
        }
        chars.next();
    }
    spec.width = take_number(chars);
    if chars.peek() == Some(&'.') {
        chars.next();
        spec.precision = Some(take_number(chars).unwrap_or(0));
    }
    spec
}

fn take_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut n: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        n = Some(n.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        chars.next();
    }
    n
}

fn write_verb(out: &mut String, verb: char, spec: &Spec, arg: &FieldValue) {
    let rendered = match (verb, arg) {
        ('v' | 's', v) => {
            let s = v.to_string();
            Some(match spec.precision {
                Some(p) => s.chars().take(p).collect(),
                None => s,
            })
        }
        ('d', FieldValue::Int(i)) => Some(signed(i.to_string(), *i >= 0, spec)),
        ('d', FieldValue::Uint(u)) => Some(signed(u.to_string(), true, spec)),
        ('f', FieldValue::Float(f)) => {
            let s = format!("{:.*}", spec.precision.unwrap_or(6), f);
            Some(signed(s, *f >= 0.0, spec))
        }
        ('t', FieldValue::Bool(b)) => Some(b.to_string()),
        ('q', FieldValue::String(s)) => Some(format!("{:?}", s)),
        ('x', v) => hex(v, false),
        ('X', v) => hex(v, true),
        _ => None,
    };

    match rendered {
        Some(s) => pad(out, &s, spec, is_numeric(verb)),
        None => {
            let _ = write!(out, "%!{}({})", verb, arg);
        }
    }
}

fn signed(s: String, non_negative: bool, spec: &Spec) -> String {
    if spec.plus && non_negative {
        format!("+{}", s)
    } else {
        s
    }
}

fn hex(value: &FieldValue, upper: bool) -> Option<String> {
    let s = match value {
        FieldValue::Int(i) if *i < 0 => format!("-{:x}", i.unsigned_abs()),
        FieldValue::Int(i) => format!("{:x}", i),
        FieldValue::Uint(u) => format!("{:x}", u),
        FieldValue::String(s) => s.bytes().map(|b| format!("{:02x}", b)).collect(),
        _ => return None,
    };
    Some(if upper { s.to_uppercase() } else { s })
}

fn is_numeric(verb: char) -> bool {
    matches!(verb, 'd' | 'f' | 'x' | 'X')
}

fn pad(out: &mut String, s: &str, spec: &Spec, numeric: bool) {
    let len = s.chars().count();
    let fill = spec.width.unwrap_or(0).saturating_sub(len);
    if fill == 0 {
        out.push_str(s);
        return;
    }

    if spec.left {
        out.push_str(s);
        out.extend(std::iter::repeat_n(' ', fill));
    } else if spec.zero {
        // numbers keep their sign ahead of the zeros; text is zero-filled as is
        let (sign, digits) = match s.chars().next() {
            Some(c @ ('-' | '+')) if numeric => (Some(c), &s[1..]),
            _ => (None, s),
        };
        if let Some(c) = sign {
            out.push(c);
        }
        out.extend(std::iter::repeat_n('0', fill));
        out.push_str(digits);
    } else {
        out.extend(std::iter::repeat_n(' ', fill));
        out.push_str(s);
    }
}
