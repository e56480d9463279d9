//! Interactive menu: prompt, read one line, dispatch, repeat until exit.

use std::io::{BufRead, Write};

use delve_core::responses::{CharacterRoster, RoomWithCharacters};
use delve_db::service::GameService;

pub const INVALID_OPTION: &str = "Invalid option, please try again.";

const MENU_LINES: [&str; 3] = ["1. Display Rooms", "2. Display Characters", "3. Exit"];
const PROMPT: &str = "Enter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayRooms,
    DisplayCharacters,
    Exit,
}

impl MenuChoice {
    /// Exact match on the line without its terminator; no trimming.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match strip_line_ending(line) {
            "1" => Some(Self::DisplayRooms),
            "2" => Some(Self::DisplayCharacters),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |rest| rest.strip_suffix('\r').unwrap_or(rest))
}

pub fn render_rooms(out: &mut impl Write, rooms: &[RoomWithCharacters]) -> std::io::Result<()> {
    for listing in rooms {
        writeln!(
            out,
            "Room: {} - {}",
            listing.room.name, listing.room.description
        )?;
        for character in &listing.characters {
            writeln!(
                out,
                "    Character: {}, Level: {}",
                character.name, character.level
            )?;
        }
    }
    Ok(())
}

pub fn render_characters(out: &mut impl Write, roster: &CharacterRoster) -> std::io::Result<()> {
    match roster {
        CharacterRoster::Empty => writeln!(out, "No characters available."),
        CharacterRoster::Characters(characters) => {
            writeln!(out, "\nCharacters:")?;
            for c in characters {
                writeln!(
                    out,
                    "Character ID: {}, Name: {}, Level: {}, Room ID: {}",
                    c.id, c.name, c.level, c.room_id
                )?;
            }
            Ok(())
        }
    }
}

/// The menu loop over any line source and sink.
pub struct Menu<'a, R, W> {
    service: &'a GameService,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub const fn new(service: &'a GameService, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Run until "3" is chosen or input ends.
    ///
    /// Storage errors are reported and the loop continues; only console I/O
    /// errors end it early.
    pub async fn show(&mut self) -> anyhow::Result<()> {
        loop {
            for line in MENU_LINES {
                writeln!(self.output, "{line}")?;
            }
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("input closed, leaving menu");
                return Ok(());
            }

            match MenuChoice::parse(&line) {
                Some(MenuChoice::DisplayRooms) => self.display_rooms().await?,
                Some(MenuChoice::DisplayCharacters) => self.display_characters().await?,
                Some(MenuChoice::Exit) => return Ok(()),
                None => {
                    tracing::debug!(input = strip_line_ending(&line), "invalid menu option");
                    writeln!(self.output, "{INVALID_OPTION}")?;
                }
            }
        }
    }

    async fn display_rooms(&mut self) -> std::io::Result<()> {
        match self.service.list_rooms().await {
            Ok(rooms) => render_rooms(&mut self.output, &rooms),
            Err(error) => self.report(&error),
        }
    }

    async fn display_characters(&mut self) -> std::io::Result<()> {
        match self.service.list_characters().await {
            Ok(roster) => render_characters(&mut self.output, &roster),
            Err(error) => self.report(&error),
        }
    }

    fn report(&mut self, error: &delve_db::error::DatabaseError) -> std::io::Result<()> {
        tracing::error!(%error, "menu operation failed");
        writeln!(self.output, "Error: {error}")
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
