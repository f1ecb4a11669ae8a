//! Line-oriented terminal front end.
//!
//! Presents the product form as a sequence of prompts. Each action collects
//! the fields it needs, runs it against [`ProductApp`], and prints the outcome
//! as `Title: message`.

use std::io::{BufRead, Write};

use anyhow::Context;

use crate::app::ProductApp;

const HELP: &str = "Actions: add, show, search, remove, save, help, quit";

/// Drive `app` from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(app: &mut ProductApp, mut input: R, mut output: W) -> anyhow::Result<()> {
    writeln!(output, "Product Manager").context("failed to write to terminal")?;
    writeln!(output, "{HELP}").context("failed to write to terminal")?;

    loop {
        let Some(action) = prompt(&mut input, &mut output, "Action")? else {
            break;
        };

        let outcome = match action.to_ascii_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "?" => {
                writeln!(output, "{HELP}").context("failed to write to terminal")?;
                continue;
            }
            "add" => {
                let Some(fields) = prompt_all(
                    &mut input,
                    &mut output,
                    ["Product Name", "Price", "Weight", "List Name"],
                )?
                else {
                    break;
                };
                let [name, price, weight, list] = fields;
                app.add_product(&name, &price, &weight, &list)
            }
            "show" => {
                let Some([list]) = prompt_all(&mut input, &mut output, ["List Name"])? else {
                    break;
                };
                app.show_all_products(&list)
            }
            "search" => {
                let Some([list, name]) =
                    prompt_all(&mut input, &mut output, ["List Name", "Search Product"])?
                else {
                    break;
                };
                app.search_product(&list, &name)
            }
            "remove" => {
                let Some([list, name]) =
                    prompt_all(&mut input, &mut output, ["List Name", "Product Name"])?
                else {
                    break;
                };
                app.remove_product(&list, &name)
            }
            "save" => app.save(),
            other => {
                writeln!(output, "Unknown action {other:?}. {HELP}")
                    .context("failed to write to terminal")?;
                continue;
            }
        };

        writeln!(output, "{outcome}").context("failed to write to terminal")?;
    }

    Ok(())
}

fn prompt_all<R: BufRead, W: Write, const N: usize>(
    input: &mut R,
    output: &mut W,
    labels: [&str; N],
) -> anyhow::Result<Option<[String; N]>> {
    let mut values: [String; N] = std::array::from_fn(|_| String::new());
    for (value, label) in values.iter_mut().zip(labels) {
        match prompt(input, output, label)? {
            Some(line) => *value = line,
            None => return Ok(None),
        }
    }
    Ok(Some(values))
}

/// Read one trimmed line after printing `label: `. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> anyhow::Result<Option<String>> {
    write!(output, "{label}: ").context("failed to write to terminal")?;
    output.flush().context("failed to flush terminal")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("failed to read {label}"))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
