#![no_main]

use cly::{Parser, ParserOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the spec-string frontend
        let _ = cly_syntax::parse_argument_spec(s);
        let _ = cly_syntax::parse_flag_spec(s);

        // Fuzz the argv scan: lines are spec strings until a blank line, then one token per line
        let (specs, args) = s.split_once("\n\n").unwrap_or((s, ""));
        let Ok(mut parser) = Parser::with_options(ParserOptions::new().with_prog("fuzz")) else {
            return;
        };
        for (i, spec) in specs.lines().enumerate() {
            if parser.add_arg(spec, format!("arg{i}")).is_err() {
                let _ = parser.flag(spec, format!("flag{i}"));
            }
        }
        let _ = parser.parse(args.lines());
        let _ = parser.help();
    }
});
