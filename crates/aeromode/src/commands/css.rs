use aeromode_core::stylesheet;

/// Prints the mode pill style sheet.
pub fn execute() {
    println!("{}", stylesheet());
}
