//! Format output dispatch helpers

/// Dispatch output by format with minimal boilerplate.
///
/// The json branch returns `Result`; human and records return `()`.
///
/// ```rust,ignore
/// output_by_format_result!(ctx.format(),
///     json => output_json(&outcome),
///     human => { output_human(&outcome); },
///     records => { output_records(&outcome); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
