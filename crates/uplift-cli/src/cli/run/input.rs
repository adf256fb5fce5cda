use regex::Regex;
use uplift_config::Question;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Input {
    Exit,
    Back,
    Answer(String),
}

pub(crate) struct InputParser {
    command: Regex,
}

impl InputParser {
    pub(crate) fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            command: Regex::new(r"^/(\w+)\s*$")?,
        })
    }

    pub(crate) fn parse(&self, line: &str) -> Result<Input, String> {
        let Some(captures) = self.command.captures(line.trim()) else {
            return Ok(Input::Answer(line.trim().to_owned()));
        };
        match &captures[1] {
            "exit" => Ok(Input::Exit),
            "back" => Ok(Input::Back),
            command => Err(format!("Unknown command /{command}, use /back or /exit")),
        }
    }
}

/// Maps what was typed to an answer token: an empty line keeps a pre-filled answer and the
/// number of a listed option picks that option.
pub(crate) fn resolve_token(question: &Question, input: &str, prefill: Option<&str>) -> String {
    if input.is_empty()
        && let Some(prefill) = prefill
    {
        return prefill.to_owned();
    }
    let options = question.options();
    if options.iter().any(|o| o.value == input) {
        return input.to_owned();
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].value.clone(),
        _ => input.to_owned(),
    }
}
