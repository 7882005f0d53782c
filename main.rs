use std::io::Write;

use clap::Parser;
use lattice_sums::io::fast_io::{self, InputStream};
use lattice_sums::{compute, reference, Error, Target};

#[derive(Parser, Debug)]
#[clap(version, about = "Divisor summatory functions over the lattice hull of y = N/x")]
struct Args {
    #[clap(long, value_enum, default_value_t = Target::DivisorCount)]
    target: Target,

    // recompute every case with the O(sqrt(N)) evaluator
    #[clap(long)]
    verify: bool,
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let args = Args::parse();
    let mut input = fast_io::stdin_at_once()?;
    let mut output = fast_io::stdout_buf();

    let cases: usize = input.value("test case count")?;
    log::debug!("{} cases, target {}", cases, args.target);
    for _ in 0..cases {
        let n: i64 = input.value("n")?;
        if n < 0 {
            return Err(Error::NegativeInput(n));
        }
        let fast = compute(args.target, n);
        if args.verify {
            let slow = reference(args.target, n);
            if fast != slow {
                return Err(Error::Mismatch {
                    n,
                    fast,
                    reference: slow,
                });
            }
        }
        writeln!(output, "{}", fast)?;
    }
    output.flush()?;
    Ok(())
}
