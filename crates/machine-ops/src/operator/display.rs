use std::fmt;

use super::{Operator, Operator1};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic)
    }
}

impl<T: fmt::Display> fmt::Display for Operator1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.base.mnemonic, self.parameter)
    }
}
