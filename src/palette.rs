//! Prints the ANSI palette, for checking how a terminal or log viewer
//! renders each code.

use std::io::{self, Write};

use crate::theme::ansi::RESET;

const ESC: &str = "\x1b[";

/// Joins SGR parameters into one escape sequence.
pub fn ansi_code(codes: &[&str]) -> String {
    format!("{}{}m", ESC, codes.join(";"))
}

/// Writes the 16-color codes plain, bold, dim and italic, then the
/// 256-color table plain and bold.
pub fn write_palette<W: Write>(f: &mut W) -> io::Result<()> {
    for modifier in [None, Some("1"), Some("2"), Some("3")] {
        for range in [30..47, 90..107] {
            for code in range {
                let code = code.to_string();
                let (sequence, label) = match modifier {
                    None => (ansi_code(&[&code]), format!("{}  ", code)),
                    Some(m) => (ansi_code(&[&code, m]), format!("{};{}", code, m)),
                };
                write!(f, "{}{}{} ", sequence, label, RESET)?;
            }
            writeln!(f)?;
        }
    }

    for bold in [false, true] {
        writeln!(f)?;
        for i in 0..=255u8 {
            let code = format!("{:03}", i);
            let sequence = if bold {
                ansi_code(&["38", "5", &code, "1"])
            } else {
                ansi_code(&["38", "5", &code])
            };
            write!(f, "{}{}{} ", sequence, code, RESET)?;
            if (usize::from(i) + 1) % 16 == 0 {
                writeln!(f)?;
            }
        }
    }
    f.flush()
}
