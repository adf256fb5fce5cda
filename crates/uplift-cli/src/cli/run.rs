use crate::cli::run::input::{Input, InputParser};
use crate::cli::run::prompt::QuestionPrompt;
use crate::cli::services::quest_service;
use crate::opt::Run;
use anyhow::{Error, Result, anyhow};
use reedline::{Reedline, Signal};
use uplift_config::ContentCatalog;
use uplift_core::{BackOutcome, FlowError, FlowHandle, FlowView, Phase, QuestService};
use uplift_model::progress::QuestProgress;

mod input;
pub(crate) mod prompt;
mod render;

/// First unlocked section that is not completed yet, or the last unlocked one.
fn pick_section(catalog: &ContentCatalog, progress: &QuestProgress) -> Option<String> {
    let quest = catalog.get_quest(&progress.quest_id)?;
    quest
        .sections()
        .map(|s| s.id())
        .find(|id| progress.is_section_unlocked(id) && !progress.is_section_completed(id))
        .or_else(|| progress.unlocked_section_ids.last().map(String::as_str))
        .map(str::to_owned)
}

enum Step {
    Ask(FlowView),
    Finish,
    Exit,
}

fn next_step(view: FlowView) -> Step {
    if view.phase == Phase::Scoring {
        Step::Finish
    } else {
        Step::Ask(view)
    }
}

async fn finish(service: &QuestService, handle: &FlowHandle) -> Result<(), Error> {
    let finished = service.finish(handle)?;
    println!("{}", render::result(&finished.display));
    if let Err(error) = finished.receipt.wait().await {
        eprintln!("Your answers could not be saved: {error}");
    }
    Ok(())
}

pub(crate) async fn run(opt: Run) -> Result<(), Error> {
    let (catalog, service) = quest_service(&opt.content, &opt.store).await?;
    let quest = catalog
        .get_quest(&opt.quest)
        .ok_or_else(|| anyhow!("Unknown quest {}", opt.quest))?;

    let progress = service.get_progress(&quest.id).await?;
    if progress.degraded {
        eprintln!("Completions could not be loaded, progress may be out of date");
    }
    if !progress.quest_unlocked {
        return Err(anyhow!("Quest {} is still locked", quest.id));
    }
    let section_id = match opt.section {
        Some(section_id) => section_id,
        None => pick_section(&catalog, &progress).ok_or_else(|| anyhow!("No section of {} is unlocked", quest.id))?,
    };
    if !progress.is_section_unlocked(&section_id) {
        return Err(anyhow!("Section {section_id} is still locked"));
    }

    let handle = service.start_section(&quest.id, &section_id).await?;
    println!("{}", render::intro(quest, &section_id));

    let mut line_editor = Reedline::create();
    let parser = InputParser::new()?;
    let mut step = next_step(handle.view()?);

    loop {
        let view = match step {
            Step::Ask(view) => view,
            Step::Finish => return finish(&service, &handle).await,
            Step::Exit => {
                handle.close();
                println!("Leaving {section_id}, nothing was saved.");
                return Ok(());
            }
        };
        let Some(question) = &view.question else {
            return Err(anyhow!("Flow has no current question"));
        };
        println!("{}", render::question(&view, question));

        let prompt = QuestionPrompt::new(view.cursor, view.question_count);
        let sig = line_editor.read_line(&prompt)?;
        let user_input = match sig {
            Signal::Success(user_input) => user_input,
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nAborted!");
                step = Step::Exit;
                continue;
            }
        };

        step = match parser.parse(&user_input) {
            Ok(Input::Exit) => Step::Exit,
            Ok(Input::Back) => match handle.go_back()? {
                BackOutcome::Moved(view) => Step::Ask(view),
                BackOutcome::ExitedFlow => Step::Exit,
            },
            Ok(Input::Answer(answer)) => {
                let token = input::resolve_token(question, &answer, view.prefill.as_deref());
                match handle.submit_answer(&token) {
                    Ok(view) => next_step(view),
                    Err(FlowError::InvalidAnswer { reason, .. }) => {
                        eprintln!("{reason}");
                        Step::Ask(view)
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Err(message) => {
                eprintln!("{message}");
                Step::Ask(view)
            }
        };
    }
}
