use crate::EngineError;
use anyhow::{bail, Context, Result};

pub const USAGE: &str = "Usage: conway_board <board size> <living cells> [seed]";

/// Command line of the front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchArgs {
    /// Side of the square board in cells.
    pub board_size: usize,
    pub living_cells: usize,
    /// Seed of the cell sampler; entropy when absent.
    pub seed: Option<u64>,
}

impl LaunchArgs {
    /// Parses the arguments that follow the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args = args.into_iter().collect::<Vec<_>>();
        if !(2..=3).contains(&args.len()) {
            bail!("expected 2 or 3 arguments, got {}", args.len());
        }
        let board_size = args[0]
            .as_ref()
            .parse::<usize>()
            .with_context(|| format!("invalid board size {:?}", args[0].as_ref()))?;
        let living_cells = args[1]
            .as_ref()
            .parse::<usize>()
            .with_context(|| format!("invalid living cell count {:?}", args[1].as_ref()))?;
        let seed = match args.get(2) {
            Some(s) => Some(
                s.as_ref()
                    .parse::<u64>()
                    .with_context(|| format!("invalid seed {:?}", s.as_ref()))?,
            ),
            None => None,
        };

        if board_size == 0 {
            return Err(EngineError::InvalidDimensions {
                rows: board_size,
                columns: board_size,
            }
            .into());
        }
        let capacity = board_size
            .checked_mul(board_size)
            .context("board size is too large")?;
        if living_cells > capacity {
            return Err(EngineError::InvalidPopulation {
                requested: living_cells,
                capacity,
            }
            .into());
        }

        Ok(Self {
            board_size,
            living_cells,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::LaunchArgs;
    use crate::EngineError;

    #[test]
    fn test_parse() {
        assert_eq!(
            LaunchArgs::parse(["64", "1000"]).unwrap(),
            LaunchArgs {
                board_size: 64,
                living_cells: 1000,
                seed: None
            }
        );
        assert_eq!(LaunchArgs::parse(["8", "64", "42"]).unwrap().seed, Some(42));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(LaunchArgs::parse(["64"]).is_err());
        assert!(LaunchArgs::parse(["64", "1", "2", "3"]).is_err());
        assert!(LaunchArgs::parse(["x64", "1"]).is_err());
        assert!(LaunchArgs::parse(["64", "-1"]).is_err());
        assert!(LaunchArgs::parse(["0", "0"]).is_err());
    }

    #[test]
    fn test_rejects_overpopulation() {
        let err = LaunchArgs::parse(["4", "17"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<EngineError>(),
            Some(&EngineError::InvalidPopulation {
                requested: 17,
                capacity: 16
            })
        );
    }
}
