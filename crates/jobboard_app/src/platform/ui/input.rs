use anyhow::{anyhow, bail, Context};
use jobboard_core::{Field, Msg, Route};

pub const HELP: &str = "\
Commands:
  open <page>          index.html, register.html, jobs_applied.html, find_jobs.html,
                       job_details.html?id=<job>, apply_job.html?id=<job>
  set <field> <value>  email phone first last education keyword date edu salary exp
  login | register | search | confirm | logout
  card <n>             press the button on card n (1-based)
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

/// Parses one line of user input. Blank lines yield `None`.
pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((line, ""));

    let command = match verb.to_ascii_lowercase().as_str() {
        "open" => {
            let route: Route = rest.parse()?;
            Command::Dispatch(Msg::Navigate(route))
        }
        "set" => {
            let (name, value) = rest
                .split_once(char::is_whitespace)
                .map(|(name, value)| (name, value.trim()))
                .unwrap_or((rest, ""));
            let field = parse_field(name)?;
            Command::Dispatch(Msg::InputChanged {
                field,
                value: value.to_string(),
            })
        }
        "login" => Command::Dispatch(Msg::LoginSubmitted),
        "register" => Command::Dispatch(Msg::RegisterSubmitted),
        "search" => Command::Dispatch(Msg::SearchSubmitted),
        "confirm" => Command::Dispatch(Msg::ApplyConfirmed),
        "logout" => Command::Dispatch(Msg::LogoutClicked),
        "card" => {
            let number: usize = rest
                .parse()
                .with_context(|| format!("card expects a number, got {:?}", rest))?;
            let index = number
                .checked_sub(1)
                .ok_or_else(|| anyhow!("cards are numbered from 1"))?;
            Command::Dispatch(Msg::CardClicked { index })
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("unknown command {:?}; type help", other),
    };
    Ok(Some(command))
}

fn parse_field(name: &str) -> anyhow::Result<Field> {
    let field = match name {
        "email" => Field::Email,
        "phone" => Field::Phone,
        "first" => Field::FirstName,
        "last" => Field::LastName,
        "education" => Field::Education,
        "keyword" => Field::Keyword,
        "date" => Field::DatePosted,
        "edu" => Field::EducationFilter,
        "salary" => Field::Salary,
        "exp" => Field::Experience,
        "" => bail!("set expects a field name"),
        other => bail!("unknown field {:?}", other),
    };
    Ok(field)
}
