
use clap::Parser;
use rstest::*;

use super::*;
