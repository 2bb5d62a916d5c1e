use hinj_pmod_converter::config::Config;
use hinj_pmod_converter::picker::StdinPicker;

fn main() {
    let mut picker = StdinPicker;
    let config = match Config::get(&mut picker) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = hinj_pmod_converter::convert(&config) {
        eprintln!("An error occurred while converting the library:\n{e}");
        std::process::exit(1);
    }
}
