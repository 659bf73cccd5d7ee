use numero_invertido::{
    InputValidator, InversionEngine, InvertirError, NumberInverter, TerminalConsole,
};
use std::io::Cursor;

const PROMPT: &str = "Digite un numero (0 a 99.999): ";
const NON_NUMERIC: &str = "Solo se permiten valores numéricos enteros.";
const OUT_OF_RANGE: &str = "El numero debe estar entre 0 y 99.999.";

fn console(input: &str) -> TerminalConsole<Cursor<Vec<u8>>, Vec<u8>> {
    TerminalConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn run_engine(input: &str) -> (Result<String, InvertirError>, String) {
    let mut engine = InversionEngine::new(console(input));
    let result = engine.run().map(|n| n.to_string());
    let output = String::from_utf8(engine.into_inner().into_writer()).unwrap();
    (result, output)
}

#[test]
fn test_leading_zeros_scenario() {
    let (result, output) = run_engine("00123\n");

    assert_eq!(result.unwrap(), "32100");
    assert_eq!(output, format!("{PROMPT}Numero invertido: 32100\n"));
}

#[test]
fn test_zero_scenario() {
    let (result, output) = run_engine("0\n");

    assert_eq!(result.unwrap(), "0");
    assert!(output.ends_with("Numero invertido: 0\n"));
}

#[test]
fn test_full_transcript_with_rejections() {
    let (result, output) = run_engine("abc\n100000\n1200\n");

    assert_eq!(result.unwrap(), "21");
    let expected = format!(
        "{PROMPT}{NON_NUMERIC}\n{PROMPT}{OUT_OF_RANGE}\n{PROMPT}Numero invertido: 21\n"
    );
    assert_eq!(output, expected);
}

#[test]
fn test_input_closed_before_valid_number() {
    let (result, output) = run_engine("-1\n");

    assert!(matches!(result, Err(InvertirError::InputClosed)));
    assert!(!output.contains("Numero invertido"));
}

#[test]
fn test_every_value_in_range_is_accepted_verbatim() {
    for n in (0..=99_999u32).step_by(997).chain([99_999]) {
        let text = n.to_string();
        let mut validator = InputValidator::new(console(&format!("{text}\n")));
        assert_eq!(validator.pedir_numero().unwrap(), text);
    }
}

#[test]
fn test_values_above_range_are_rejected() {
    for text in ["100000", "123456", "999999999", "18446744073709551616000"] {
        let mut validator = InputValidator::new(console(&format!("{text}\n")));
        assert!(matches!(
            validator.pedir_numero(),
            Err(InvertirError::InputClosed)
        ));
        let output = String::from_utf8(validator.into_inner().into_writer()).unwrap();
        assert!(output.contains(OUT_OF_RANGE), "{text} should be out of range");
    }
}

#[test]
fn test_inverting_the_validated_text() {
    let mut validator = InputValidator::new(console("x\n5400\n"));
    let num = validator.pedir_numero().unwrap();

    let once = NumberInverter::new(num).invertir();
    let twice = NumberInverter::new(once.to_string()).invertir();

    assert_eq!(once, 45u64);
    assert_eq!(twice, 54u64);
}
