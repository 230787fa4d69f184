use hookupza_common::{AccountType, Credentials, SignupRequest, VendorData};

use crate::error::ValidationError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Raw values of the login form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

impl LoginInput {
    /// Checks the form before anything is sent. The username is trimmed, the password is sent as
    /// typed.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let username = self.username.trim();
        if username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(Credentials {
            username: username.to_owned(),
            password: self.password.clone(),
        })
    }
}

/// Raw values of the signup form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupInput {
    pub username: String,
    pub password: String,
    pub age: String,
    pub location: String,
    pub email: String,
    pub account_type: AccountType,
    pub business_name: String,
    pub whatsapp: String,
    pub service_description: String,
}

impl SignupInput {
    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let username = self.username.trim();
        let age = self.age.trim();
        if username.is_empty() || self.password.is_empty() || age.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }
        let vendor_data = match self.account_type {
            AccountType::Free => None,
            AccountType::Vendor => {
                let business_name = self.business_name.trim();
                if business_name.is_empty() {
                    return Err(ValidationError::MissingBusinessName);
                }
                Some(VendorData {
                    business_name: business_name.to_owned(),
                    whatsapp: self.whatsapp.trim().to_owned(),
                    service_description: self.service_description.trim().to_owned(),
                })
            }
        };
        Ok(SignupRequest {
            username: username.to_owned(),
            password: self.password.clone(),
            age: age.to_owned(),
            location: self.location.trim().to_owned(),
            email: self.email.trim().to_owned(),
            account_type: self.account_type,
            vendor_data,
        })
    }
}

#[cfg(test)]
mod test {
    use hookupza_common::AccountType;
    use rstest::{fixture, rstest};

    use super::{LoginInput, SignupInput};
    use crate::error::ValidationError;

    #[fixture]
    fn signup() -> SignupInput {
        SignupInput {
            username: " newbie ".to_owned(),
            password: "correct horse".to_owned(),
            age: "25".to_owned(),
            location: " Cape Town ".to_owned(),
            ..Default::default()
        }
    }

    #[rstest]
    #[case::empty_username("", "secret")]
    #[case::blank_username("   ", "secret")]
    #[case::empty_password("alice", "")]
    fn login_should_require_both_fields(#[case] username: &str, #[case] password: &str) {
        let input = LoginInput {
            username: username.to_owned(),
            password: password.to_owned(),
        };

        assert_eq!(input.validate(), Err(ValidationError::MissingCredentials));
    }

    #[test]
    fn login_should_trim_username_only() -> Result<(), ValidationError> {
        let input = LoginInput {
            username: "  alice ".to_owned(),
            password: " pass ".to_owned(),
        };

        let credentials = input.validate()?;

        assert_eq!(credentials.username, "alice");
        assert_eq!(credentials.password, " pass ");
        Ok(())
    }

    #[rstest]
    fn free_signup_should_build_request(signup: SignupInput) -> Result<(), ValidationError> {
        let request = signup.validate()?;

        assert_eq!(request.username, "newbie");
        assert_eq!(request.age, "25");
        assert_eq!(request.location, "Cape Town");
        assert_eq!(request.account_type, AccountType::Free);
        assert!(request.vendor_data.is_none());
        Ok(())
    }

    #[rstest]
    #[case::short("short")]
    #[case::seven("1234567")]
    #[case::seven_multibyte("ñññññññ")]
    fn signup_should_reject_short_password(mut signup: SignupInput, #[case] password: &str) {
        signup.password = password.to_owned();

        assert_eq!(
            signup.validate(),
            Err(ValidationError::PasswordTooShort(8))
        );
    }

    #[rstest]
    #[case::username(|s: &mut SignupInput| s.username = " ".to_owned())]
    #[case::password(|s: &mut SignupInput| s.password.clear())]
    #[case::age(|s: &mut SignupInput| s.age.clear())]
    #[case::blank_age(|s: &mut SignupInput| s.age = "  ".to_owned())]
    fn signup_should_require_fields(mut signup: SignupInput, #[case] clear: fn(&mut SignupInput)) {
        clear(&mut signup);

        assert_eq!(
            signup.validate(),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[rstest]
    #[case::range(" 25-34 ", "25-34")]
    #[case::number("41", "41")]
    fn signup_should_send_age_as_typed(
        mut signup: SignupInput,
        #[case] age: &str,
        #[case] expected: &str,
    ) -> Result<(), ValidationError> {
        signup.age = age.to_owned();

        let request = signup.validate()?;

        assert_eq!(request.age, expected);
        Ok(())
    }

    #[rstest]
    fn vendor_signup_should_need_business_name(mut signup: SignupInput) {
        signup.account_type = AccountType::Vendor;

        assert_eq!(
            signup.validate(),
            Err(ValidationError::MissingBusinessName)
        );
    }

    #[rstest]
    fn vendor_signup_should_carry_vendor_data(
        mut signup: SignupInput,
    ) -> Result<(), ValidationError> {
        signup.account_type = AccountType::Vendor;
        signup.business_name = " Braai Masters ".to_owned();
        signup.whatsapp = "0821234567".to_owned();

        let request = signup.validate()?;
        let vendor_data = request.vendor_data.expect("vendor data should be present");

        assert_eq!(vendor_data.business_name, "Braai Masters");
        assert_eq!(vendor_data.whatsapp, "0821234567");
        Ok(())
    }
}
