use fluidspec::{
    cli::{get_log_level_from_verbose, parse_cli, run_init, run_list, Commands},
    error::default_error_handler,
};

fn main() {
    let cli = parse_cli();

    let dispatch_result = match cli.command {
        Commands::Init(args) => {
            let lvl = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(lvl).init();
            run_init(args)
        }
        Commands::List(args) => {
            let lvl = get_log_level_from_verbose(args.verbose);
            env_logger::Builder::new().filter_level(lvl).init();
            run_list(args)
        }
    };

    if let Err(err) = dispatch_result {
        default_error_handler(err);
    }
}
