use crate::domain::invoice::Invoice;
use crate::error::Result;
use std::io::{BufReader, Read, Write};

/// Reads a JSON array of invoices.
pub fn read_invoices<R: Read>(source: R) -> Result<Vec<Invoice>> {
    Ok(serde_json::from_reader(BufReader::new(source))?)
}

/// Writes invoices as a pretty-printed JSON array.
pub fn write_invoices<W: Write>(mut sink: W, invoices: &[Invoice]) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, invoices)?;
    writeln!(sink)?;
    Ok(())
}
