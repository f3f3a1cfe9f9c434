#![no_main]

use libfuzzer_sys::fuzz_target;
use mycomplex_core::{Complex, ComplexReader};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic, and anything parsed must format and parse again
    if let Ok((z, rest)) = Complex::parse_prefix(text) {
        assert!(rest.len() < text.len());
        if z.re.is_finite() && z.im.is_finite() && z.im.to_bits() != (-0.0f64).to_bits() {
            let again: Complex = z.to_string().parse().expect("display output must parse");
            assert_eq!(again.re.to_bits(), z.re.to_bits());
            assert_eq!(again.im.to_bits(), z.im.to_bits());
        }
    }

    let _ = text.parse::<Complex>();

    // The reader terminates and stays failed after an error
    let mut reader = ComplexReader::new(data);
    while let Some(item) = reader.next() {
        if item.is_err() {
            assert!(reader.next().is_none());
            break;
        }
    }
});
