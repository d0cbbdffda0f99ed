mod identity;

pub use identity::{
    HttpIdentityVerifier, IIdentityVerifier, TokenSubjectVerifier, VerifiedIdentity,
};
