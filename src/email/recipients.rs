/// Ordered list of recipient addresses.
///
/// A single address becomes a one-element list, and a collection is kept
/// as given, in order and with duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients(Vec<String>);

impl Recipients {
  pub fn as_slice(&self) -> &[String] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, String> {
    self.0.iter()
  }

  pub fn into_vec(self) -> Vec<String> {
    self.0
  }
}

impl From<&str> for Recipients {
  fn from(address: &str) -> Self {
    Recipients(vec![address.to_string()])
  }
}

impl From<String> for Recipients {
  fn from(address: String) -> Self {
    Recipients(vec![address])
  }
}

impl From<&String> for Recipients {
  fn from(address: &String) -> Self {
    Recipients(vec![address.clone()])
  }
}

impl From<Vec<String>> for Recipients {
  fn from(addresses: Vec<String>) -> Self {
    Recipients(addresses)
  }
}

impl From<Vec<&str>> for Recipients {
  fn from(addresses: Vec<&str>) -> Self {
    Recipients(addresses.into_iter().map(str::to_string).collect())
  }
}

impl From<&[&str]> for Recipients {
  fn from(addresses: &[&str]) -> Self {
    Recipients(addresses.iter().map(|a| a.to_string()).collect())
  }
}

impl From<&[String]> for Recipients {
  fn from(addresses: &[String]) -> Self {
    Recipients(addresses.to_vec())
  }
}

impl<const N: usize> From<[&str; N]> for Recipients {
  fn from(addresses: [&str; N]) -> Self {
    Recipients(addresses.iter().map(|a| a.to_string()).collect())
  }
}

impl FromIterator<String> for Recipients {
  fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
    Recipients(iter.into_iter().collect())
  }
}

impl<'a> IntoIterator for &'a Recipients {
  type Item = &'a String;
  type IntoIter = std::slice::Iter<'a, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
