// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Tickpaper v{} - Convert a TickTick CSV backup into a TaskPaper outline",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} <backup.csv>                 Convert and copy to clipboard", binary_name);
    println!("    {} <backup.csv> --stdout        Print the outline instead", binary_name);
    println!("    {} <backup.csv> -o <out.taskpaper>", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    --stdout              Print to stdout instead of the clipboard.");
    println!("    -o, --output <file>   Write the outline to a file.");
    println!("    -v, --verbose         Enable debug logging.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("EXAMPLES:");
    println!("    {} TickTick-backup-2024-03-14.csv", binary_name);
    println!("    {} backup.csv --stdout > tasks.taskpaper", binary_name);
    println!("    {} backup.csv --stdout | grep '@flagged'", binary_name);
    println!();
    println!("Tasks are grouped by 'Folder List' project, sorted by creation time.");
    println!("Dates are rendered in each task's own timezone as MM/DD/YYYY h:mm:ss AM/PM.");
}
