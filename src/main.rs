use bitsquares_lib::codec::{
    bitboard_from_bits, bits_from_coords, bits_from_indices, coords_from_bits, indices_from_bits,
    reverse_bits,
};

use std::{
    error::Error,
    io::{prelude::*, stdin},
};

mod commands;

use commands::{Command, CommandParseError};

fn main() -> Result<(), Box<dyn Error>> {
    if std::env::args().nth(1) == Some(String::from("demo")) {
        run_demo()?;
        return Ok(());
    }

    for line in stdin().lock().lines() {
        let cmd = match commands::parse_command(line?) {
            Ok(cmd) => cmd,
            Err(CommandParseError::Empty) => {
                continue;
            }
            Err(CommandParseError::Other(e)) => {
                eprintln!("{e}");
                continue;
            }
        };

        match cmd {
            Command::Coords { bits } => match coords_from_bits(&bits) {
                Ok(coords) => println!("{}", coords.join(" ")),
                Err(e) => eprintln!("{e}"),
            },
            Command::Bits { coords } => match bits_from_coords(&coords) {
                Ok(bits) => println!("{bits}"),
                Err(e) => eprintln!("{e}"),
            },
            Command::Indices { bits } => match indices_from_bits(&bits) {
                Ok(indices) => println!(
                    "{}",
                    indices
                        .iter()
                        .map(|index| index.to_string())
                        .collect::<Vec<String>>()
                        .join(" ")
                ),
                Err(e) => eprintln!("{e}"),
            },
            Command::Squares { indices } => match bits_from_indices(&indices) {
                Ok(bits) => println!("{bits}"),
                Err(e) => eprintln!("{e}"),
            },
            Command::Reverse { bits } => println!("{}", reverse_bits(&bits)),
            Command::Show { bits } => match bitboard_from_bits(&bits) {
                Ok(board) => println!("{board}"),
                Err(e) => eprintln!("{e}"),
            },
            Command::Quit => break,
        }
    }
    Ok(())
}

const DEMO_BOARDS: [(&str, u64); 3] = [
    ("white bishops", 8589934628),
    ("black pawns", 69524319247532032),
    ("black king", 1152921504606846976),
];

fn run_demo() -> Result<(), Box<dyn Error>> {
    for (label, board) in DEMO_BOARDS {
        let coords = coords_from_bits(&format!("{board:b}"))?;
        println!("{label}: {}", coords.join(" "));
    }
    Ok(())
}
