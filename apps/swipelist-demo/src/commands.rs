//! Line commands understood by the demo session.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context};

pub const HELP: &str = "\
commands:
  add                    insert a new item at the top
  swipe <row> <dx> <dy>  swipe from the center of a row
  drag <x> <y> <dx> <dy> swipe from a screen point
  scroll <dy>            scroll the list
  tick [frames]          advance animations (default 1 frame)
  list                   print the rows on screen
  save                   write state to the state file
  help                   show this text
  quit                   save and exit";

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Add,
    Swipe { row: usize, dx: f32, dy: f32 },
    Drag { x: f32, y: f32, dx: f32, dy: f32 },
    Scroll { dy: f32 },
    Tick { frames: usize },
    List,
    Save,
    Help,
    Quit,
}

fn arg<T: FromStr>(args: &[&str], index: usize, name: &str) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .get(index)
        .ok_or_else(|| anyhow!("missing argument <{name}>"))?;
    raw.parse()
        .with_context(|| format!("invalid <{name}>: {raw:?}"))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            bail!("empty command");
        };
        let args: Vec<&str> = words.collect();
        let command = match name {
            "add" | "a" => Command::Add,
            "swipe" | "s" => Command::Swipe {
                row: arg(&args, 0, "row")?,
                dx: arg(&args, 1, "dx")?,
                dy: arg(&args, 2, "dy")?,
            },
            "drag" => Command::Drag {
                x: arg(&args, 0, "x")?,
                y: arg(&args, 1, "y")?,
                dx: arg(&args, 2, "dx")?,
                dy: arg(&args, 3, "dy")?,
            },
            "scroll" => Command::Scroll {
                dy: arg(&args, 0, "dy")?,
            },
            "tick" | "t" => Command::Tick {
                frames: if args.is_empty() {
                    1
                } else {
                    arg(&args, 0, "frames")?
                },
            },
            "list" | "l" => Command::List,
            "save" => Command::Save,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => bail!("unknown command {other:?}, try `help`"),
        };
        Ok(command)
    }
}
