use fzf_preview::cli::{self, BlameArgs};
use fzf_preview::preview::BlamePreviewer;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(|args: BlameArgs, session, out| {
        BlamePreviewer::new(&session.config, &session.runner).preview(
            &args.file_path,
            args.extension.as_deref(),
            out,
        )?;
        Ok(())
    })
}
