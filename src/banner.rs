// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
  _____  ____  _____       ____  _   _  ____  
 (____ |/ ___)| ___ |     / ___)| | | ||  _ \ 
 / ___ ( (___ | ____|    | |    | |_| || | | |
 \_____|\____)|_____)    |_|    |____/ |_| |_|

    Code-to-model bridge for the ACE editor
"#;
    println!("{}", banner);
}
