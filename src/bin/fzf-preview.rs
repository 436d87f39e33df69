use fzf_preview::cli::{self, ContentArgs};
use fzf_preview::preview::ContentPreviewer;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(|args: ContentArgs, session, out| {
        ContentPreviewer::new(&session.config, &session.runner).preview(&args.path, out)?;
        Ok(())
    })
}
