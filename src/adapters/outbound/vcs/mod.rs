/// Version-control adapters for materializing repositories
mod git_cloner;

pub use git_cloner::GitCloner;
