use clap::Parser;
use invoice_payments::application::processor::PaymentProcessor;
use invoice_payments::domain::ports::InvoiceRepositoryBox;
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceRepository;
use invoice_payments::interfaces::csv::outcome_writer::OutcomeWriter;
use invoice_payments::interfaces::csv::payment_reader::PaymentReader;
use invoice_payments::interfaces::json;
use invoice_payments::logging;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments CSV file (`reference, amount`)
    payments: PathBuf,

    /// JSON file holding the invoices payments are applied to
    #[arg(long)]
    invoices: PathBuf,

    /// Write the final invoice state as JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Tracing filter directives, overriding RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let invoices_file = File::open(&cli.invoices)
        .into_diagnostic()
        .wrap_err_with(|| format!("opening invoices file {}", cli.invoices.display()))?;
    let invoices = json::read_invoices(invoices_file).into_diagnostic()?;
    info!(count = invoices.len(), "loaded invoices");

    let repository: InvoiceRepositoryBox =
        Box::new(InMemoryInvoiceRepository::with_invoices(invoices));
    let processor = PaymentProcessor::new(repository);

    let payments_file = File::open(&cli.payments)
        .into_diagnostic()
        .wrap_err_with(|| format!("opening payments file {}", cli.payments.display()))?;
    let reader = PaymentReader::new(payments_file);

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    let mut processed = 0usize;
    let mut failed = 0usize;

    for payment_result in reader.payments() {
        match payment_result {
            Ok(payment) => match processor.process_payment(payment.clone()).await {
                Ok(outcome) => {
                    writer.write_outcome(&payment, outcome).into_diagnostic()?;
                    processed += 1;
                }
                Err(e) => {
                    warn!(reference = %payment.reference, error = %e, "payment failed");
                    eprintln!("Error processing payment: {}", e);
                    failed += 1;
                }
            },
            Err(e) => {
                eprintln!("Error reading payment: {}", e);
                failed += 1;
            }
        }
    }
    writer.flush().into_diagnostic()?;
    info!(processed, failed, "finished processing payments");

    let invoices = processor.into_results().await.into_diagnostic()?;
    if let Some(path) = cli.output {
        let file = File::create(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("creating output file {}", path.display()))?;
        json::write_invoices(file, &invoices).into_diagnostic()?;
    }

    Ok(())
}
