use std::io::{self, BufRead, Write};

use divvy_lib::id::IdGenerator;

use crate::{
    config::Config,
    render::Renderer,
    session::{Command, Flow, Session, HELP},
    Error,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Shell;

impl Shell {
    pub fn run(self, config: &Config) -> Result<(), Error> {
        let renderer = Renderer::new(config.currency()?);
        let session = Session::new(config.ledger()?, &config.avatar_template);

        let stdin = io::stdin();
        interact(session, renderer, stdin.lock(), io::stdout())
    }
}

/// Read commands line by line until the input ends or the user quits,
/// redrawing the screen after each one
fn interact<G: IdGenerator>(
    mut session: Session<G>,
    renderer: Renderer,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), Error> {
    let draw = |session: &Session<G>| {
        renderer.screen(
            session.ledger(),
            session.add_friend_form(),
            session.split_bill_form(),
        )
    };

    write!(output, "{}", draw(&session))?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;

        let flow = match line.parse::<Command>() {
            Ok(command) => session.handle(command),
            Err(e) => {
                writeln!(output, "{}", e)?;
                Ok(Flow::Continue)
            }
        };

        match flow {
            Ok(Flow::Quit) => return Ok(()),
            Ok(Flow::Help) => write!(output, "{}", HELP)?,
            Ok(Flow::Continue) => write!(output, "{}", draw(&session))?,
            Err(e @ Error::UnknownFriend(_)) => writeln!(output, "{}", e)?,
            Err(e) => return Err(e),
        }

        prompt(&mut output)?;
    }

    Ok(())
}

fn prompt(output: &mut impl Write) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}
