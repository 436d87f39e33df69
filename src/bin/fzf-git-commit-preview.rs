use fzf_preview::cli::{self, CommitArgs};
use fzf_preview::preview::CommitPreviewer;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(|args: CommitArgs, session, out| {
        CommitPreviewer::new(&session.config, &session.runner).preview(&args.commit, out)?;
        Ok(())
    })
}
