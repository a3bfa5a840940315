use crate::converter::{Conversion, Converter};
use pyo3::prelude::*;
use pyo3::types::PyDict;

impl<'py> IntoPyObject<'py> for Conversion {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = std::convert::Infallible;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let decision = PyDict::new(py);
        decision.set_item("name", &self.table.name).unwrap();

        let inputs: Vec<Bound<'py, PyDict>> = self
            .table
            .inputs
            .iter()
            .map(|input| {
                let entry = PyDict::new(py);
                entry.set_item("name", &input.name).unwrap();
                entry.set_item("type", &input.input_type).unwrap();
                entry
            })
            .collect();
        decision.set_item("input", inputs).unwrap();

        let rules: Vec<Bound<'py, PyDict>> = self
            .table
            .rules
            .iter()
            .map(|rule| {
                let entry = PyDict::new(py);
                entry.set_item("condition", &rule.condition).unwrap();
                entry.set_item("output", &rule.output).unwrap();
                entry
            })
            .collect();
        decision.set_item("rules", rules).unwrap();

        decision
            .set_item("original_sql", &self.table.original_sql)
            .unwrap();
        decision.set_item("dmn_xml", &self.table.xml).unwrap();

        let dmn = PyDict::new(py);
        dmn.set_item("decision", decision).unwrap();

        let dict = PyDict::new(py);
        dict.set_item("success", true).unwrap();
        dict.set_item("dmn", dmn).unwrap();

        // Handle the diagram outcome - exactly one of the two keys is populated
        match self.diagram {
            Ok(diagram) => {
                dict.set_item("diagram", diagram).unwrap();
                dict.set_item("diagram_error", py.None()).unwrap();
            }
            Err(error) => {
                dict.set_item("diagram", py.None()).unwrap();
                dict.set_item("diagram_error", error.to_string()).unwrap();
            }
        }

        Ok(dict)
    }
}

/// A SQL to DMN decision table converter.
///
/// This class wraps the conversion pipeline: it extracts conditions from a
/// query's WHERE clause, builds a DMN XML document, and renders a Mermaid
/// diagram of the result. One instance can convert any number of queries.
#[pyclass(name = "SqlDmn")]
struct SqlDmnPy {
    converter: Converter,
}

#[pymethods]
impl SqlDmnPy {
    /// Initializes a converter with wall-clock document identifiers.
    ///
    /// Returns:
    ///     SqlDmn: An initialized instance of the converter.
    #[new]
    fn new() -> Self {
        SqlDmnPy {
            converter: Converter::new(),
        }
    }

    /// Converts one SQL query into a DMN decision table.
    ///
    /// The query's WHERE clause is split on `and`; every condition with at
    /// least three whitespace-separated tokens becomes one decision-table
    /// input and one rule. A query without a usable WHERE clause still
    /// converts, producing an empty table.
    ///
    /// Args:
    ///     sql (str): The SQL query text to convert.
    ///
    /// Returns:
    ///     dict: A dictionary mirroring the JSON wire shape with four keys:
    ///         - "success" (bool): Always True on return.
    ///         - "dmn" (dict): The decision table under a "decision" key,
    ///           including the full DMN XML as "dmn_xml".
    ///         - "diagram" (str | None): The Mermaid diagram text.
    ///         - "diagram_error" (str | None): The diagram failure message,
    ///           set only when no diagram could be rendered.
    ///
    /// Raises:
    ///     ValueError: If the query is empty or whitespace-only.
    fn convert(&self, sql: &str) -> PyResult<Conversion> {
        let conversion = self
            .converter
            .convert(sql)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(conversion)
    }
}

/// A SQL to DMN decision table converter.
///
/// This module provides Python bindings to the sqldmn Rust library, allowing
/// SQL WHERE clauses to be turned into DMN decision tables and Mermaid
/// diagrams without a separate conversion service.
#[pymodule]
fn sqldmn(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SqlDmnPy>()?;
    Ok(())
}
