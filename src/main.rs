use std::process::ExitCode;

use addressbook::demo::{create_book, render};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_target(false)
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let book = match create_book() {
    Ok(book) => book,
    Err(err) => {
      error!("{:<12} - {err}", "CREATE BOOK");
      return ExitCode::FAILURE;
    }
  };

  info!(len = book.len(), capacity = book.capacity(), "book ready");

  for row in render(&book) {
    println!("{row}");
  }

  // releases the backing block
  drop(book);

  ExitCode::SUCCESS
}
