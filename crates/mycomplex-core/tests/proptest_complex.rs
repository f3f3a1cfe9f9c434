use mycomplex_core::Complex;
use proptest::prelude::*;

fn complex() -> impl Strategy<Value = Complex> {
    (-1e6f64..1e6f64, -1e6f64..1e6f64).prop_map(|(re, im)| Complex::new(re, im))
}

// Property 1: Complex arithmetic matches the component formulas exactly
proptest! {
    #[test]
    fn prop_componentwise_arithmetic(a in complex(), b in complex()) {
        prop_assert_eq!(a + b, Complex::new(a.re + b.re, a.im + b.im));
        prop_assert_eq!(a - b, Complex::new(a.re - b.re, a.im - b.im));
        prop_assert_eq!(
            a * b,
            Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
        );
    }
}

// Property 2: Modulus is non-negative and matches sqrt(re² + im²)
proptest! {
    #[test]
    fn prop_abs_matches_formula(a in complex()) {
        let direct = (a.re * a.re + a.im * a.im).sqrt();
        let abs = a.abs();

        prop_assert!(abs >= 0.0);
        prop_assert!(
            (abs - direct).abs() <= direct * 1e-15,
            "hypot {} vs direct {}", abs, direct
        );
        prop_assert_eq!(a.to_scalar(), abs);
    }
}

// Property 3: Scalar addition is commutative and leaves the imaginary part alone
proptest! {
    #[test]
    fn prop_scalar_addition(a in complex(), s in -1e6f64..1e6f64) {
        let sum = a + s;

        prop_assert_eq!(sum.re, a.re + s);
        prop_assert_eq!(sum.im, a.im);
        prop_assert_eq!(s + a, sum);
        prop_assert_eq!(s * a, a * s);
    }
}

// Property 4: Scalar subtraction is asymmetric
proptest! {
    #[test]
    fn prop_scalar_subtraction_asymmetric(a in complex(), s in -1e6f64..1e6f64) {
        let left = s - a;
        let right = a - s;

        prop_assert_eq!(left.re, s - a.re);
        prop_assert_eq!(left.im, -a.im);
        prop_assert_eq!(right.im, a.im);

        if a.im != 0.0 {
            prop_assert_ne!(left, right);
        }
    }
}

// Property 5: Compound assignment equals the binary operator
proptest! {
    #[test]
    fn prop_compound_assignment(a in complex(), b in complex(), s in -1e3f64..1e3f64) {
        let mut c = a;
        c += b;
        prop_assert_eq!(c, a + b);

        let mut c = a;
        c -= b;
        prop_assert_eq!(c, a - b);

        let mut c = a;
        c *= b;
        prop_assert_eq!(c, a * b);

        let mut c = a;
        c += s;
        prop_assert_eq!(c, a + s);

        let mut c = a;
        c -= s;
        prop_assert_eq!(c, a - s);

        let mut c = a;
        c *= s;
        prop_assert_eq!(c, a * s);

        prop_assume!(s != 0.0);
        let mut c = a;
        c /= s;
        prop_assert_eq!(c, a / s);
    }
}

// Property 6: Scalar assignment zeroes the imaginary part
proptest! {
    #[test]
    fn prop_scalar_assignment(a in complex(), s in any::<f64>()) {
        let mut c = a;
        c.set_scalar(s);

        prop_assert_eq!(c.re.to_bits(), s.to_bits());
        prop_assert_eq!(c.im.to_bits(), 0.0f64.to_bits());
        prop_assert_eq!(Complex::from(s).im.to_bits(), 0.0f64.to_bits());
    }
}

// Property 7: Display output reads back exactly
proptest! {
    #[test]
    fn prop_text_roundtrip(re in any::<f64>(), im in any::<f64>()) {
        prop_assume!(re.is_finite() && im.is_finite());
        // -0.0 is written as "+-0" and does not read back
        prop_assume!(im.to_bits() != (-0.0f64).to_bits());
        let z = Complex::new(re, im);
        let text = z.to_string();

        let parsed: Complex = text.parse().unwrap();
        prop_assert_eq!(parsed.re.to_bits(), re.to_bits(), "text {}", text);
        prop_assert_eq!(parsed.im.to_bits(), im.to_bits(), "text {}", text);
    }
}
