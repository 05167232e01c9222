use std::process::ExitCode;

use clap::Parser;
use jvm_descriptor::DescriptorParser;

/// Command line arguments
#[derive(Parser)]
#[command(name = "signature-parser")]
#[command(about = "Lists the parameter types of a JVM method descriptor", long_about = None)]
struct Args {
    /// Method descriptor, e.g. '(ILjava/lang/String;[D)V'
    descriptor: String,

    /// Also print how many slots each parameter is from the top of the operand stack
    #[arg(short, long)]
    slots: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match print_parameters(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_parameters(args: &Args) -> jvm_descriptor::Result<()> {
    let parser = DescriptorParser::new(args.descriptor.as_str())?;
    for (index, token) in parser.parameters().enumerate() {
        let token = token?;
        if args.slots {
            println!("{token}\t{}", parser.slots_from_top_of_stack(index)?);
        } else {
            println!("{token}");
        }
    }
    println!("{} parameter(s)", parser.num_parameters()?);
    Ok(())
}
