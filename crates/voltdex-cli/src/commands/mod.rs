pub mod data;
pub mod links;
pub mod records;

/// Store type every command runs against
pub type CliStore = voltdex_core::Store<Box<dyn voltdex_core::KvBackend>>;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: serde::Serialize + ?Sized>(
    value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
