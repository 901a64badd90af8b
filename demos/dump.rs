// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use sexpr_reader::ast::{Ast, NodeId};
use sexpr_reader::lexer::tokens;
use sexpr_reader::read::read_file;
use sexpr_reader::settings::{Modes, Settings};
use sexpr_reader::syntax::Syntax;
use sexpr_reader::token::TokenKind;
use clap::Parser as ClapParser;
use std::path::PathBuf;
use anyhow::{Result, bail};
use tracing_subscriber::EnvFilter;


#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print the token stream of the first file instead of building a tree
    #[clap(short, long, value_parser)]
    tokens: bool,
    /// Keep comments in the tree
    #[clap(short, long, value_parser)]
    comments: bool,
    /// Allow atoms outside of any list
    #[clap(long, value_parser)]
    toplevel_atoms: bool,
    /// Paths to the input files, all read into the same tree
    #[clap(value_parser, required(true))]
    input_paths: Vec<PathBuf>,
}

fn print_node(ast: &Ast, id: NodeId, indent: usize) {
    let node = ast.node(id);
    println!("{:indent$}{}:{:03}:{:03} {:?}({:?})",
             "",
             node.file(),
             node.pos().line,
             node.pos().col,
             node.kind(),
             String::from_utf8_lossy(node.data()),
             indent = indent);
    for &child in node.children() {
        print_node(ast, child, indent + 2);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let syntax = Syntax::scheme();

    if args.tokens {

        // Just show what the lexer makes of the first file.

        let data = std::fs::read(&args.input_paths[0])?;
        for token in tokens(&data, &syntax) {
            if let TokenKind::Err(e) = token.kind {
                bail!("{:?}{}: {}", args.input_paths[0], token.pos, e)
            }
            println!("{} {}", token.pos, token);
        }

    } else {

        let modes = Modes {
            retain_comments: args.comments,
            toplevel_atoms: args.toplevel_atoms,
        };
        let settings = Settings { syntax: &syntax, modes: &modes };
        let mut ast = Ast::new();
        for path in &args.input_paths {
            read_file(&mut ast, path, &settings)?;
        }
        println!("Files:");
        for (i, f) in ast.files().iter().enumerate() {
            println!("- {}: {:?}", i, f);
        }
        println!("Nodes:");
        for &id in ast.node(ast.root()).children() {
            print_node(&ast, id, 2);
        }

    }
    Ok(())
}
