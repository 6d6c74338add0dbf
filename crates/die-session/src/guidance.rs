//! Static help text shown around roll collection.

use die_stats::Die;

/// Opening line of every session.
pub const BANNER: &str =
    "This will calculate the probability that a 3, 4, 6, 8, 10, 12, or 20 -sided die is unfair.";

/// Suggested roll counts as multiples of the face count, with the rough
/// chance of catching an unfair die at each.
pub const SUGGESTED_MULTIPLES: [(u32, &str); 4] =
    [(5, "20%"), (10, "70%"), (15, "90%"), (20, "99%")];

/// How many rolls to make, and how to enter and stop them.
pub fn guidance(die: Die) -> String {
    let faces = die.faces();
    let mut out = String::from("How many times do I need to roll?\n");
    out.push_str("  Depends on how confident you want to be.\n");
    for (multiple, chance) in SUGGESTED_MULTIPLES {
        out.push_str(&format!(
            "  {} rolls -> ~{chance} chance of catching an unfair die\n",
            faces * multiple
        ));
    }
    out.push_str(&format!(
        "  Also, doing a multiple of {faces} will help give the cleanest results.\n"
    ));
    out.push_str(&format!(
        "The program will tell you what roll you are on. \
         Enter a number larger than {faces} when you want to end.\n"
    ));
    if die.entry_width() > 1 {
        out.push_str("For numbers less than 10, enter with a leading 0. e.g. 03, 04, 08\n");
    }
    out
}

/// Reminder shown when collection resumes after a report.
pub fn resume_hint(die: Die, next_roll: u32) -> String {
    format!(
        "Continuing from roll {next_roll}. Enter a number larger than {} when you want to end.\n",
        die.faces()
    )
}
