//! Console command parsing

use crate::state::{BoundField, PartitionPlan, TableSection, TableSections};
use std::str::FromStr;

pub const HELP: &str = "\
commands:
  <index_min|index_max|value_min|value_max> <value>   edit a window bound
  partition <count> <first> <last>                     select index blocks
  sections <general|variation|all>                     choose table sections
  reset                                                restore the full window
  table | lines | points | bounds                      show output
  save                                                 append a report
  help | quit";

/// One line of console input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Edit { field: BoundField, raw: String },
    Partition(PartitionPlan),
    Sections(TableSections),
    Reset,
    Table,
    Lines,
    Points,
    Bounds,
    Save,
    Help,
    Quit,
}

fn count(word: Option<&str>, what: &str) -> Result<usize, String> {
    word.ok_or_else(|| format!("missing {}", what))?
        .parse()
        .map_err(|_| format!("{} must be a whole number", what))
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        if let Ok(field) = head.parse::<BoundField>() {
            // an empty value is passed through so the edit is rejected, not the command
            return Ok(Command::Edit {
                field,
                raw: rest.to_string(),
            });
        }

        let command = match head {
            "partition" => {
                let mut words = rest.split_whitespace();
                Command::Partition(PartitionPlan::new(
                    count(words.next(), "partition count")?,
                    count(words.next(), "first block")?,
                    count(words.next(), "last block")?,
                ))
            }
            "sections" => Command::Sections(match rest {
                "general" => TableSections::only(TableSection::General),
                "variation" => TableSections::only(TableSection::Variation),
                "all" | "" => TableSections::default(),
                other => return Err(format!("unknown section '{}'", other)),
            }),
            "reset" => Command::Reset,
            "table" => Command::Table,
            "lines" => Command::Lines,
            "points" => Command::Points,
            "bounds" => Command::Bounds,
            "save" => Command::Save,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => return Err("empty command".to_string()),
            other => return Err(format!("unknown command '{}'", other)),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_commands() {
        assert_eq!(
            "value_max 12.5".parse::<Command>(),
            Ok(Command::Edit {
                field: BoundField::ValueMax,
                raw: "12.5".to_string()
            })
        );
        assert_eq!(
            "index_min".parse::<Command>(),
            Ok(Command::Edit {
                field: BoundField::IndexMin,
                raw: String::new()
            })
        );
    }

    #[test]
    fn test_partition_command() {
        assert_eq!(
            "partition 4 2 3".parse::<Command>(),
            Ok(Command::Partition(PartitionPlan::new(4, 2, 3)))
        );
        assert!("partition 4 x 3".parse::<Command>().is_err());
        assert!("partition 4".parse::<Command>().is_err());
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(
            "sections general".parse::<Command>(),
            Ok(Command::Sections(TableSections::only(TableSection::General)))
        );
        assert_eq!("  quit ".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("reset".parse::<Command>(), Ok(Command::Reset));
        assert!("plot".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }
}
