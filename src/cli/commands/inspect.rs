//! Inspect command - Show legal moves and terminal status for a board

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{format_list, print_board, print_kv, print_section},
    tictactoe::{
        Board, LineAnalyzer, Outcome, Player, action_space, allowed_positions, allowed_values,
        is_terminal,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Inspect a board: allowed positions, values and terminal status")]
pub struct InspectArgs {
    /// Board as 9 symbols, digits 1-9 or '.' for empty (whitespace ignored),
    /// e.g. "1234....."
    pub board: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Everything the environment would compute for one board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectReport {
    pub board: String,
    pub allowed_positions: Vec<usize>,
    pub agent_values: Vec<u8>,
    pub env_values: Vec<u8>,
    pub agent_action_count: usize,
    pub env_action_count: usize,
    pub winning_lines: Vec<[usize; 3]>,
    /// Status if the agent made the last move
    pub after_agent: Outcome,
    /// Status if the env made the last move
    pub after_env: Outcome,
}

pub fn inspect(board: &Board) -> InspectReport {
    let values = allowed_values(board);
    let space = action_space(board);
    InspectReport {
        board: board.encode(),
        allowed_positions: allowed_positions(board),
        agent_values: values.agent,
        env_values: values.env,
        agent_action_count: space.len(Player::Agent),
        env_action_count: space.len(Player::Env),
        winning_lines: LineAnalyzer::winning_lines(board),
        after_agent: is_terminal(board, Player::Agent).1,
        after_env: is_terminal(board, Player::Env).1,
    }
}

pub fn execute(args: InspectArgs) -> Result<()> {
    let board = Board::from_string(&args.board)
        .with_context(|| format!("parsing board '{}'", args.board))?;
    let report = inspect(&board);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Board");
    print_board(&board);
    print_kv("Allowed positions", &format_list(&report.allowed_positions));
    print_kv("Agent values", &format_list(&report.agent_values));
    print_kv("Env values", &format_list(&report.env_values));
    print_kv("Agent actions", &report.agent_action_count.to_string());
    print_kv("Env actions", &report.env_action_count.to_string());
    let lines: Vec<String> = report
        .winning_lines
        .iter()
        .map(|line| format_list(&line[..]))
        .collect();
    let lines = if lines.is_empty() {
        "none".to_string()
    } else {
        lines.join(" ")
    };
    print_kv("Winning lines", &lines);
    print_kv("After agent move", &report.after_agent.to_string());
    print_kv("After env move", &report.after_env.to_string());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_partial_board() {
        let board = Board::from_string("1234.....").unwrap();
        let report = inspect(&board);
        assert_eq!(report.allowed_positions, vec![4, 5, 6, 7, 8]);
        assert_eq!(report.agent_values, vec![5, 7, 9]);
        assert_eq!(report.env_values, vec![6, 8]);
        assert_eq!(report.agent_action_count, 15);
        assert_eq!(report.env_action_count, 10);
        assert!(report.winning_lines.is_empty());
        assert_eq!(report.after_agent, Outcome::Resume);
    }

    #[test]
    fn report_for_won_board() {
        let board = Board::from_string("5..4..6..").unwrap();
        let report = inspect(&board);
        assert_eq!(report.winning_lines, vec![[0, 3, 6]]);
        assert_eq!(report.after_agent, Outcome::Win);
        assert_eq!(report.after_env, Outcome::Lose);
    }
}
