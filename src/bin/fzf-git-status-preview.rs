use fzf_preview::cli::{self, StatusArgs};
use fzf_preview::preview::StatusPreviewer;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(|args: StatusArgs, session, out| {
        StatusPreviewer::new(&session.config, &session.runner).preview(&args.file_path, out)?;
        Ok(())
    })
}
