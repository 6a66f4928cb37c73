//! Interactive numbered terminal menu.

use std::io::{self, BufRead, Write};

use simulation::ascii_map::{balance_line, build_garage_map};
use simulation::game_actions::{ActionResult, GarageAction};
use simulation::input::parse_positive;

use crate::session::Session;

const MENU: &str = "
1. Reserve Parking Spot
2. Increase Bank Balance
3. Display Parking Garage
4. Advance Hours
5. Display Bank Balance
6. Exit";

pub fn run_menu<R: BufRead, W: Write>(mut session: Session, mut input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "{}", build_garage_map(session.garage()))?;

    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut out, "Enter your choice: ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let raw = prompt(&mut input, &mut out, "Enter duration to reserve (in hours): ")?;
                submit(&mut session, &mut out, raw, "duration", |hours| {
                    GarageAction::Reserve { hours }
                })?;
            }
            "2" => {
                let raw = prompt(
                    &mut input,
                    &mut out,
                    "Enter the amount to increase bank balance: ",
                )?;
                submit(&mut session, &mut out, raw, "amount", |amount| {
                    GarageAction::TopUp { amount }
                })?;
            }
            "3" => writeln!(out, "{}", build_garage_map(session.garage()))?,
            "4" => {
                let raw = prompt(&mut input, &mut out, "Enter number of hours to advance: ")?;
                if submit(&mut session, &mut out, raw, "hours", |hours| {
                    GarageAction::AdvanceTime { hours }
                })? {
                    writeln!(out, "{}", build_garage_map(session.garage()))?;
                }
            }
            "5" => writeln!(out, "{}", balance_line(session.garage()))?,
            "6" => {
                writeln!(out, "Exiting...")?;
                break;
            }
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }
    Ok(())
}

/// Print `label` and read one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Validate `raw`, run the resulting action and print its outcome. Returns
/// whether the action succeeded.
fn submit<W: Write>(
    session: &mut Session,
    out: &mut W,
    raw: Option<String>,
    field: &str,
    make: impl FnOnce(u32) -> GarageAction,
) -> io::Result<bool> {
    let value = match parse_positive(field, raw.as_deref().unwrap_or("")) {
        Ok(v) => v,
        Err(e) => {
            writeln!(out, "{e}")?;
            return Ok(false);
        }
    };
    let result = session.act(make(value));
    writeln!(out, "{}", describe(&result))?;
    Ok(result.is_success())
}

fn describe(result: &ActionResult) -> String {
    match result {
        ActionResult::Reserved(r) => format!(
            "Parking spot at ({}, {}) reserved for {} hours.\nYou were charged: ${:.2}\nBank Balance: ${:.2}",
            r.spot.row, r.spot.col, r.hours, r.charged, r.balance
        ),
        ActionResult::BalanceUpdated { balance } => {
            format!("Bank balance increased. New balance: ${balance:.2}")
        }
        ActionResult::TimeAdvanced(t) => format!(
            "Advanced {} hours to {}. {} spots freed, {} new arrivals.",
            t.hours,
            t.clock.formatted(),
            t.freed,
            t.backfilled
        ),
        ActionResult::Success => "Done.".to_string(),
        ActionResult::Error(e) => e.to_string(),
    }
}
