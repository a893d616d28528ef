use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::debug;
use utf8_chars::BufReadCharsExt;

use crate::{
    environment::prelude::EnvId,
    eval::prelude::{EvalError, EvalResult},
    expression::prelude::Expression,
    parser::prelude::{parse_from_stream, parse_program},
    utils::prelude::Error,
};

use super::Interpreter;

impl Interpreter {
    /// Evaluates a file line by line in `env`, skipping blank lines.
    ///
    /// A form left open at the end of a line continues on the next one. The
    /// first failure aborts the load; forms already evaluated keep their
    /// effects.
    pub fn load_file(&mut self, path: &Path, env: EnvId) -> EvalResult<()> {
        debug!(path = %path.display(), "loading file");

        let io_error = |err: std::io::Error| EvalError::Io {
            path: path.to_path_buf(),
            err: err.kind(),
        };

        let file = File::open(path).map_err(io_error)?;
        let mut pending = String::new();
        let mut forms = 0usize;

        for line in BufReader::new(file).lines() {
            let line = line.map_err(io_error)?;

            if line.trim().is_empty() && pending.is_empty() {
                continue;
            }

            pending.push_str(&line);
            pending.push('\n');

            let parsed = match parse_program(&pending) {
                Ok(parsed) => parsed,
                Err(error) if error.is_incomplete() => continue,
                Err(error) => return Err(EvalError::Syntax {
                    path: path.to_path_buf(),
                    src: pending,
                    error,
                }),
            };

            pending.clear();

            for expression in &parsed.expressions {
                self.eval_in(expression, env)?;
                forms += 1;
            }
        }

        if let Err(error) = parse_program(&pending) {
            return Err(EvalError::Syntax {
                path: path.to_path_buf(),
                src: pending,
                error,
            });
        }

        debug!(path = %path.display(), forms, "loaded file");

        Ok(())
    }

    /// Reads a whole file as one character stream and evaluates every form
    /// in the root environment, handing each result to `on_result`.
    ///
    /// Collects unreachable frames between forms once the configured
    /// threshold is reached.
    pub fn run_file(
        &mut self,
        path: PathBuf,
        mut on_result: impl FnMut(&Expression)
    ) -> Result<(), Error> {
        debug!(path = %path.display(), "running file");

        let file = File::open(&path).map_err(|err| Error::StdIo { err: err.kind() })?;

        let file_size = file.metadata()
            .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

        let mut src = String::with_capacity(file_size);
        let mut read_error = None;
        let mut reader = BufReader::new(file);
        let stream = reader.chars()
            .map_while(|c| match c {
                Ok(c) => {
                    src.push(c);
                    Some(c)
                },
                Err(err) => {
                    read_error = Some(err.kind());
                    None
                }
            });

        let parsed = parse_from_stream(stream);

        if let Some(err) = read_error {
            return Err(Error::StdIo { err });
        }

        let parsed = parsed.map_err(|error| Error::Parse { path, src, error })?;

        for expression in &parsed.expressions {
            let result = self.eval(expression)?;
            on_result(&result);
            self.collect_if_needed(&[]);
        }

        Ok(())
    }
}
