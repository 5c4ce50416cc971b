//! Validation message strings shown in the checkout form.

pub const ADDRESS_REQUIRED: &str = "Необходимо указать адрес";
pub const ADDRESS_INVALID: &str = "Укажите настоящий адрес";
pub const PAYMENT_REQUIRED: &str = "Выберите способ оплаты";
pub const EMAIL_REQUIRED: &str = "Необходимо указать email";
pub const EMAIL_INVALID: &str = "Некорректный адрес электронной почты";
pub const PHONE_REQUIRED: &str = "Необходимо указать телефон";
pub const PHONE_INVALID: &str = "Некорректный формат номера телефона";
