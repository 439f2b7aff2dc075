use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use bigdecimal::BigDecimal;
use decicalc::{format_decimal, CalculationRequest};
use serde_json::Value;

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Render a successful calculation. `raw` prints the bare result for piping.
    pub fn format_calculation(
        &self,
        request: &CalculationRequest,
        operation: &str,
        result: &BigDecimal,
        raw: bool,
    ) -> String {
        let result = format_decimal(result);
        if raw {
            return format!("{}\n", result);
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Input").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Left),
        ]));

        table.add_row(Row::from(vec!["num1".to_string(), display_value(&request.num1)]));
        table.add_row(Row::from(vec!["operation".to_string(), operation.to_string()]));
        table.add_row(Row::from(vec!["num2".to_string(), display_value(&request.num2)]));

        let mut output = table.to_string();
        output.push_str(&format!("\nresult = {}\n", result));
        output
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_raw_output_is_bare_result() {
        let request = CalculationRequest::new("10", "4", "divide");
        let output = Formatter::default().format_calculation(
            &request,
            "divide",
            &BigDecimal::from_str("2.5").unwrap(),
            true,
        );
        assert_eq!(output, "2.5\n");
    }

    #[test]
    fn test_table_lists_inputs_and_result() {
        let request = CalculationRequest::new("0.1", "0.2", "ADD");
        let output = Formatter::default().format_calculation(
            &request,
            "add",
            &BigDecimal::from_str("0.3").unwrap(),
            false,
        );

        assert!(output.contains("Input"));
        assert!(output.contains("0.1"));
        assert!(output.contains("0.2"));
        assert!(output.contains("add"));
        assert!(!output.contains("ADD"));
        assert!(output.ends_with("result = 0.3\n"));
    }

    #[test]
    fn test_result_uses_decimal_notation() {
        let request = CalculationRequest::new("1", "1e-29", "divide");
        let output = Formatter::default().format_calculation(
            &request,
            "divide",
            &BigDecimal::from_str("1e29").unwrap(),
            true,
        );
        assert_eq!(output, "1E+29\n");
    }
}
