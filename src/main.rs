//! Entry point: reads one HTTP API event (JSON) from stdin and writes the
//! response document (JSON) to stdout. Logs go to stderr.

use std::io::{self, Read, Write};
use std::sync::Arc;

use run_length_encoder::observability::init_logging;
use run_length_encoder::{EncodeHandler, EncoderConfig, EncoderError, VERSION};

fn main() -> Result<(), EncoderError> {
    let config = EncoderConfig::from_env()?;
    init_logging(&config);
    log::debug!("run-length-encoder v{} starting", VERSION);

    let handler = EncodeHandler::new(Arc::new(config));

    let mut raw_event = String::new();
    io::stdin().read_to_string(&mut raw_event)?;

    let response = handler.handle_json(&raw_event)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response)?;
    stdout.flush()?;
    Ok(())
}
