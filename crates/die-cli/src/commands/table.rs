use comfy_table::{ContentArrangement, Table};
use die_stats::Die;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Die", "Faces", "90%", "95%", "97%", "99%"]);

    for die in Die::all() {
        let mut row = vec![die.to_string(), die.faces().to_string()];
        row.extend(die.critical_values().as_array().iter().map(|v| format!("{v:.1}")));
        table.add_row(row);
    }

    println!("{table}");
    println!();
    println!("  x2 under the 90% value: no concern. Over the 97% value: probably unfair.");

    Ok(())
}
