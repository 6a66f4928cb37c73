//! ASCII rendering of the garage for terminal front ends.
//!
//! Layout:
//!
//! ```text
//! Bank Balance: $35.00
//! Hour of the day: 12
//! Day of the week: Monday
//! [R4] [ ] [X7] ...
//! ```
//!
//! `[ ]` is a free spot, `[R<h>]` the user's reservation and `[X<h>]` a
//! stochastic occupant, each showing the hours left. Built on demand from
//! `&Garage`; nothing runs per update.

use crate::garage::Garage;
use crate::grid::{Owner, ParkingGrid, Spot};

/// Text for a single spot.
pub fn spot_label(spot: &Spot) -> String {
    match spot {
        Spot::Empty => "[ ]".to_string(),
        Spot::Occupied {
            owner,
            remaining_hours,
        } => format!("[{}{}]", owner_char(*owner), remaining_hours),
    }
}

fn owner_char(owner: Owner) -> char {
    match owner {
        Owner::User => 'R',
        Owner::Stochastic => 'X',
    }
}

/// One line per row, cells separated by a single space.
pub fn build_grid_map(grid: &ParkingGrid) -> String {
    let mut lines = Vec::with_capacity(grid.rows());
    for row in 0..grid.rows() {
        let cells: Vec<String> = grid.row(row).iter().map(spot_label).collect();
        lines.push(cells.join(" "));
    }
    lines.join("\n")
}

pub fn balance_line(garage: &Garage) -> String {
    format!("Bank Balance: ${:.2}", garage.balance())
}

/// Status header followed by the grid.
pub fn build_garage_map(garage: &Garage) -> String {
    let clock = garage.clock();
    format!(
        "{}\nHour of the day: {}\nDay of the week: {}\n{}",
        balance_line(garage),
        clock.hour,
        clock.day,
        build_grid_map(garage.grid())
    )
}
