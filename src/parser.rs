use crate::complex::Complex;

// Grammar for complex literals typed at the operand prompt. Accepts plain
// reals ("3", "-2.5"), pure imaginaries ("4i"), rectangular forms ("3 + 4i",
// "1-2i") and the paired form ("(3, 4)").
peg::parser! {
    pub grammar complex_parser() for str {
        rule _ = [' ']*

        rule float() -> f64
            = v:$("-"? ['0'..='9']+ ("." ['0'..='9']+)? (['e' | 'E'] "-"? ['0'..='9']+)?) {? v.parse().or(Err("number format error")) }

        rule unsigned() -> f64
            = v:$(['0'..='9']+ ("." ['0'..='9']+)? (['e' | 'E'] "-"? ['0'..='9']+)?) {? v.parse().or(Err("number format error")) }

        rule complex() -> Complex
            = "(" _ real:float() _ ("," / "+") _ imag:float() "i"? _ ")" { Complex::new(real, imag) } /
              real:float() _ "+" _ imag:unsigned() "i" { Complex::new(real, imag) } /
              real:float() _ "-" _ imag:unsigned() "i" { Complex::new(real, -imag) } /
              imag:float() "i" { Complex::new(0.0, imag) } /
              real:float() { Complex::from_real(real) }

        pub rule line() -> Complex
            = _ v:complex() _ { v }
    }
}
