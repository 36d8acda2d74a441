//! 每个命令的用法说明，格式统一为 `<word>: <description>`

pub const ADD_USAGE: &str = "add: Adds a person to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney";

pub const EDIT_USAGE: &str = "edit: Edits the details of the person identified by the index number \
used in the displayed person list. Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number \
used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub const FIND_USAGE: &str = "find: Finds all persons whose names or tags contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: [n/NAME_KEYWORDS]... [t/TAG_KEYWORDS]...\n\
Example: find n/alice bob t/friends";

pub const LIST_USAGE: &str = "list: Lists all persons in the address book.";

pub const CLEAR_USAGE: &str = "clear: Clears all persons from the address book.";

pub const EXIT_USAGE: &str = "exit: Exits the application.";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\n\
Example: help";

pub const SORT_STRENGTH_USAGE: &str =
    "sort-strength: Sorts the person list by number of strengths, most first";

pub const SORT_WEAKNESS_USAGE: &str =
    "sort-weakness: Sorts the person list by number of weaknesses, most first";

pub const SORT_DATE_USAGE: &str = "sort-date: Sorts the task list by date, earlier dates first";

pub const ADD_STRENGTH_USAGE: &str = "add-strength: Adds a strength note to the person identified \
by the index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer) NOTE\n\
Example: add-strength 1 Strong three-point shooter";

pub const ADD_WEAKNESS_USAGE: &str = "add-weakness: Adds a weakness note to the person identified \
by the index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer) NOTE\n\
Example: add-weakness 1 Slow on defensive transitions";

pub const ADD_MISC_USAGE: &str = "add-misc: Adds a miscellaneous note to the person identified \
by the index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer) NOTE\n\
Example: add-misc 1 Prefers morning practice";

pub const DELETE_STRENGTH_USAGE: &str = "delete-strength: Deletes a strength note of the person \
identified by the index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer) NOTE_INDEX (must be a positive integer)\n\
Example: delete-strength 1 2";

pub const DELETE_WEAKNESS_USAGE: &str = "delete-weakness: Deletes a weakness note of the person \
identified by the index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer) NOTE_INDEX (must be a positive integer)\n\
Example: delete-weakness 1 2";

pub const DELETE_MISC_USAGE: &str = "delete-misc: Deletes a miscellaneous note of the person \
identified by the index number used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer) NOTE_INDEX (must be a positive integer)\n\
Example: delete-misc 1 2";

pub const ADD_TASK_USAGE: &str = "add-task: Adds a task to the task list.\n\
Parameters: d/DATE (dd-MM-yyyy) c/CONTENTS\n\
Example: add-task d/10-10-2022 c/Book the gym";

pub const DELETE_TASK_USAGE: &str = "delete-task: Deletes the task identified by the index number \
used in the task list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete-task 1";

pub const CLEAR_TASK_USAGE: &str = "clear-task: Deletes every task on the given date.\n\
Parameters: d/DATE (dd-MM-yyyy)\n\
Example: clear-task d/10-10-2022";

pub const LOAD_COURT_USAGE: &str = "load-court: Loads the court image with the given name \
from the court directory as the background.\n\
Parameters: IMAGE_NAME\n\
Example: load-court basketball";
